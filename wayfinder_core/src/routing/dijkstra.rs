use crate::graph::Graph;
use crate::weighting::Weight;

use super::astar::AStar;
use super::astar_heuristic::AStarHeuristic;

pub struct DijkstraHeuristic;

impl AStarHeuristic for DijkstraHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &impl Graph, _node: usize, _end: usize) -> Weight {
        0.0
    }
}

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(graph: &impl Graph) -> AStar<DijkstraHeuristic> {
        AStar::with_heuristic(graph, DijkstraHeuristic)
    }
}
