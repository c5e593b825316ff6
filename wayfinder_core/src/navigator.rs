use tracing::{debug, info};

use crate::city::{City, Connection, MapInfo};
use crate::city_index::CityIndex;
use crate::city_locator::CityLocator;
use crate::error::RoutingError;
use crate::graph::Graph;
use crate::graph_store::GraphStore;
use crate::route_result::{RouteResult, RouteResultBuilder};
use crate::routing::alternative::AlternativeRouteFinder;
use crate::routing::astar::AStar;
use crate::routing::path::Path;
use crate::routing::shortest_path_algorithm::{
    SearchError, ShortestPathAlgorithm, ShortestPathOptions,
};
use crate::weighting::DistanceWeighting;

/// A route request in external terms: city names as the front-end sends
/// them, matched case-sensitively.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub startpoint: String,
    pub endpoint: String,
}

/// Facade over one loaded map: the immutable graph plus the lookup indexes
/// built from it. Switching maps means building a new Navigator and swapping
/// it in whole; a published one is never mutated, so concurrent requests can
/// share it freely.
pub struct Navigator {
    store: GraphStore,
    index: CityIndex,
    locator: CityLocator,
}

impl Navigator {
    pub fn new(info: MapInfo, cities: Vec<City>, connections: &[Connection]) -> Navigator {
        let store = GraphStore::build(info, cities, connections);
        let index = CityIndex::build(&store);
        let locator = CityLocator::build_from_store(&store);

        info!(
            map = %store.info().name,
            cities = store.node_count(),
            connections = store.edge_count(),
            "Loaded map"
        );

        Navigator {
            store,
            index,
            locator,
        }
    }

    pub fn route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
        self.route_with_options(request, None)
    }

    pub fn route_with_options(
        &self,
        request: &RouteRequest,
        options: Option<ShortestPathOptions>,
    ) -> Result<RouteResult, RoutingError> {
        let start = self
            .store
            .find_by_name(&request.startpoint)
            .ok_or_else(|| RoutingError::CityNotFound(request.startpoint.clone()))?;
        let end = self
            .store
            .find_by_name(&request.endpoint)
            .ok_or_else(|| RoutingError::CityNotFound(request.endpoint.clone()))?;

        let builder = RouteResultBuilder::new(&self.store);

        if start == end {
            return Ok(builder.build(&Path::single_node(start), None));
        }

        let weighting = DistanceWeighting;

        let mut astar = AStar::new(&self.store);
        let primary = match astar.calc_path(&self.store, &weighting, start, end, options.clone())
        {
            Ok(path) => path,
            Err(SearchError::NoPath) => {
                return Err(RoutingError::NoPathFound {
                    start: request.startpoint.clone(),
                    end: request.endpoint.clone(),
                });
            }
            Err(SearchError::Cancelled) => return Err(RoutingError::Cancelled),
        };

        let alternative = match AlternativeRouteFinder::alternative_path(
            &self.store,
            &weighting,
            &primary,
            options,
        ) {
            Ok(path) => Some(path),
            Err(SearchError::NoPath) => {
                debug!(
                    start = %request.startpoint,
                    end = %request.endpoint,
                    "No alternative route"
                );
                None
            }
            Err(SearchError::Cancelled) => return Err(RoutingError::Cancelled),
        };

        Ok(builder.build(&primary, alternative.as_ref()))
    }

    /// Ranked autocomplete suggestions for a partial city name.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        self.index
            .search(query, limit)
            .into_iter()
            .map(|node| self.store.city(node).name.clone())
            .collect()
    }

    pub fn closest_city(&self, x: f64, y: f64) -> Option<&City> {
        self.locator.nearest(x, y).map(|node| self.store.city(node))
    }

    pub fn info(&self) -> &MapInfo {
        self.store.info()
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }
}
