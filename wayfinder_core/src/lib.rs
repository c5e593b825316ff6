pub mod cancel;
pub mod city;
pub mod city_index;
pub mod city_locator;
pub mod constants;
pub mod edge_filter;
pub mod error;
pub mod graph;
pub mod graph_store;
pub mod navigator;
pub mod position;
pub mod route_result;
pub mod routing;
pub mod weighting;

mod test_map_utils;
