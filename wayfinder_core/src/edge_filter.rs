use fxhash::FxHashSet;

use crate::graph::Graph;
use crate::graph_store::GraphEdge;
use crate::position::Position;

/// Read-only overlay that hides a set of edges from an underlying graph.
/// Node and edge ids keep their meaning, hidden edges are simply never
/// yielded during neighbor iteration.
pub struct EdgeFilteredGraph<'a, G: Graph> {
    inner: &'a G,
    excluded: FxHashSet<usize>,
}

impl<'a, G: Graph> EdgeFilteredGraph<'a, G> {
    pub fn new(inner: &'a G, excluded: FxHashSet<usize>) -> Self {
        EdgeFilteredGraph { inner, excluded }
    }
}

pub struct FilteredEdgeIter<'a, I> {
    inner: I,
    excluded: &'a FxHashSet<usize>,
}

impl<I: Iterator<Item = usize>> Iterator for FilteredEdgeIter<'_, I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.inner.find(|edge_id| !self.excluded.contains(edge_id))
    }
}

impl<G: Graph> Graph for EdgeFilteredGraph<'_, G> {
    type EdgeIterator<'b>
        = FilteredEdgeIter<'b, G::EdgeIterator<'b>>
    where
        Self: 'b;

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn node_edges_iter(&self, node: usize) -> Self::EdgeIterator<'_> {
        FilteredEdgeIter {
            inner: self.inner.node_edges_iter(node),
            excluded: &self.excluded,
        }
    }

    fn edge(&self, edge: usize) -> &GraphEdge {
        self.inner.edge(edge)
    }

    fn node_position(&self, node: usize) -> &Position {
        self.inner.node_position(node)
    }
}
