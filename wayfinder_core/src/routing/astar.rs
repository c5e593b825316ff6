use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT};
use crate::graph::Graph;
use crate::weighting::{Weight, Weighting};

use super::astar_heuristic::{AStarHeuristic, EuclideanHeuristic};
use super::path::Path;
use super::shortest_path_algorithm::{
    SearchError, ShortestPathAlgorithm, ShortestPathOptions,
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: usize,

    /// g_score is the current cheapest weight from the start to "node_id"
    g_score: Weight,

    /// f_score = g_score + h_score, with h_score being the heuristic value
    /// from node_id to the end
    f_score: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip the scores to make this a min-heap. Among equal-cost items the
        // lowest node index pops first, which keeps searches reproducible.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.g_score.total_cmp(&self.g_score))
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    settled: bool,
    weight: Weight,
    parent: usize,
    edge_id: usize, // Edge id from the parent to the current node
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            settled: false,
            weight: MAX_WEIGHT,
            parent: INVALID_NODE,
            edge_id: INVALID_EDGE,
        }
    }
}

pub struct AStar<H: AStarHeuristic> {
    heap: BinaryHeap<HeapItem>,

    // A map instead of a dense vector: a search allocates in proportion to
    // the region it explores, not to the size of the whole map.
    data: FxHashMap<usize, NodeData>,

    heuristic: H,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(_graph: &impl Graph, heuristic: H) -> AStar<H> {
        AStar {
            heap: BinaryHeap::with_capacity(1024),
            data: FxHashMap::default(),
            heuristic,
        }
    }

    fn init(&mut self, graph: &impl Graph, start: usize, end: usize) {
        self.heap.clear();
        self.data.clear();

        let h_score = self.heuristic.estimate(graph, start, end);
        self.heap.push(HeapItem {
            node_id: start,
            g_score: 0.0,
            f_score: h_score,
        });
        self.update_node_data(start, 0.0, INVALID_NODE, INVALID_EDGE)
    }

    fn update_node_data(&mut self, node: usize, weight: Weight, parent: usize, edge_id: usize) {
        if let Some(data) = self.data.get_mut(&node) {
            data.weight = weight;
            data.settled = false;
            data.parent = parent;
            data.edge_id = edge_id;
        } else {
            self.data.insert(
                node,
                NodeData {
                    weight,
                    settled: false,
                    edge_id,
                    parent,
                },
            );
        }
    }

    fn node_data(&mut self, node: usize) -> &NodeData {
        self.data.entry(node).or_insert_with(NodeData::new)
    }

    fn set_settled(&mut self, node: usize) {
        self.data.get_mut(&node).unwrap().settled = true
    }

    #[inline(always)]
    fn is_settled(&mut self, node: usize) -> bool {
        self.node_data(node).settled
    }

    #[inline(always)]
    fn current_shortest_weight(&mut self, node: usize) -> Weight {
        self.node_data(node).weight
    }

    fn build_path(&mut self, end: usize) -> Path {
        let mut nodes: Vec<usize> = Vec::with_capacity(32);
        let mut edges: Vec<usize> = Vec::with_capacity(32);

        // The settled weight of the end node is the sum accumulated in search
        // order, so repeated searches report bit-identical distances.
        let distance = self.node_data(end).weight;

        let mut node = end;
        nodes.push(node);

        let mut node_data = self.node_data(node);
        while node_data.parent != INVALID_NODE {
            edges.push(node_data.edge_id);
            node = node_data.parent;
            nodes.push(node);
            node_data = self.node_data(node);
        }

        nodes.reverse();
        edges.reverse();

        Path::new(nodes, edges, distance)
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: usize,
        end: usize,
        options: Option<ShortestPathOptions>,
    ) -> Result<Path, SearchError> {
        let cancellation = options.and_then(|options| options.cancellation);

        self.init(graph, start, end);

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = self.heap.pop()
        {
            if let Some(token) = &cancellation {
                if token.is_cancelled() {
                    return Err(SearchError::Cancelled);
                }
            }

            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // The weight is bigger than the current shortest weight, skip
            if g_score > self.current_shortest_weight(node_id) {
                continue;
            }

            if g_score > self.current_shortest_weight(end) {
                continue;
            }

            for edge_id in graph.node_edges_iter(node_id) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.adj_node(node_id);

                if self.is_settled(adj_node) {
                    continue;
                }

                let edge_weight = weighting.calc_edge_weight(edge);

                if edge_weight == MAX_WEIGHT {
                    continue;
                }

                let next_weight = g_score + edge_weight;

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, node_id, edge_id);
                    let h_score = self.heuristic.estimate(graph, adj_node, end);

                    self.heap.push(HeapItem {
                        g_score: next_weight,
                        f_score: next_weight + h_score,
                        node_id: adj_node,
                    });
                }
            }

            self.set_settled(node_id);
            if node_id == end {
                break;
            }
        }

        if self.current_shortest_weight(end) == MAX_WEIGHT {
            return Err(SearchError::NoPath);
        }

        Ok(self.build_path(end))
    }
}

impl AStar<EuclideanHeuristic> {
    pub fn new(graph: &impl Graph) -> AStar<EuclideanHeuristic> {
        Self::with_heuristic(graph, EuclideanHeuristic)
    }
}
