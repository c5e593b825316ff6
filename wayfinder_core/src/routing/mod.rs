pub mod alternative;
pub mod astar;
pub mod astar_heuristic;
pub mod dijkstra;
pub mod path;
pub mod shortest_path_algorithm;
