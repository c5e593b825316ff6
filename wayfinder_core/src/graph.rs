use crate::graph_store::GraphEdge;
use crate::position::Position;

/// Read-only view the search algorithms traverse. Implemented by the graph
/// store itself and by overlays that hide parts of it.
pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn node_edges_iter(&self, node: usize) -> Self::EdgeIterator<'_>;
    fn edge(&self, edge: usize) -> &GraphEdge;
    fn node_position(&self, node: usize) -> &Position;
}
