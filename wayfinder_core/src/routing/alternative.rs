use fxhash::FxHashSet;

use crate::edge_filter::EdgeFilteredGraph;
use crate::graph::Graph;
use crate::weighting::Weighting;

use super::astar::AStar;
use super::path::Path;
use super::shortest_path_algorithm::{
    SearchError, ShortestPathAlgorithm, ShortestPathOptions,
};

pub struct AlternativeRouteFinder;

impl AlternativeRouteFinder {
    /// Second route that shares no edge with the primary: every edge of the
    /// primary path is hidden behind an overlay and the search runs again on
    /// what is left. Nodes may still be shared; on sparse maps a node
    /// disjoint requirement would rule out alternatives far too often.
    pub fn alternative_path(
        graph: &impl Graph,
        weighting: &impl Weighting,
        primary: &Path,
        options: Option<ShortestPathOptions>,
    ) -> Result<Path, SearchError> {
        let excluded: FxHashSet<usize> = primary.edges().iter().copied().collect();
        let reduced = EdgeFilteredGraph::new(graph, excluded);

        let mut astar = AStar::new(&reduced);
        astar.calc_path(
            &reduced,
            weighting,
            primary.start_node(),
            primary.end_node(),
            options,
        )
    }
}
