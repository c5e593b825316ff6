use crate::graph::Graph;
use crate::weighting::Weight;

pub trait AStarHeuristic {
    fn estimate(&self, graph: &impl Graph, node: usize, end: usize) -> Weight;
}

/// Straight-line distance to the target. Admissible and consistent here
/// because every edge weight is itself the Euclidean distance between its
/// endpoints, so the estimate can never overshoot the remaining cost.
pub struct EuclideanHeuristic;

impl AStarHeuristic for EuclideanHeuristic {
    fn estimate(&self, graph: &impl Graph, node: usize, end: usize) -> Weight {
        graph
            .node_position(node)
            .euclidean_distance(graph.node_position(end))
    }
}
