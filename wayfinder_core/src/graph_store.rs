use fxhash::FxHashMap;
use tracing::warn;

use crate::city::{City, Connection, MapInfo};
use crate::graph::Graph;
use crate::position::Position;
use crate::weighting::Weight;

#[derive(Debug, Clone)]
pub struct GraphEdge {
    id: usize,
    start_node: usize,
    end_node: usize,
    weight: Weight,
}

impl GraphEdge {
    pub fn new(id: usize, start_node: usize, end_node: usize, weight: Weight) -> Self {
        GraphEdge {
            id,
            start_node,
            end_node,
            weight,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn start_node(&self) -> usize {
        self.start_node
    }

    pub fn end_node(&self) -> usize {
        self.end_node
    }

    pub fn adj_node(&self, node: usize) -> usize {
        if self.start_node == node {
            self.end_node
        } else {
            self.start_node
        }
    }
}

/// The immutable graph of one loaded map. Cities are addressed internally by
/// dense node index; the lookup tables map the external id and name keys onto
/// those indexes. Build a new store to switch maps, never patch one in place.
pub struct GraphStore {
    info: MapInfo,
    cities: Vec<City>,
    edges: Vec<GraphEdge>,
    adjacency_list: Vec<Vec<usize>>,
    id_lookup: FxHashMap<u64, usize>,
    name_lookup: FxHashMap<String, usize>,
}

impl GraphStore {
    /// Builds the routing graph. Connections referencing a city that is not
    /// part of the map are excluded here, once, so no per-query guard is
    /// needed and a partially connected map still routes over its valid
    /// subgraph.
    pub fn build(info: MapInfo, cities: Vec<City>, connections: &[Connection]) -> GraphStore {
        let mut id_lookup =
            FxHashMap::with_capacity_and_hasher(cities.len(), Default::default());
        let mut name_lookup =
            FxHashMap::with_capacity_and_hasher(cities.len(), Default::default());

        for (node, city) in cities.iter().enumerate() {
            id_lookup.insert(city.id, node);
            name_lookup.insert(city.name.clone(), node);
        }

        let mut edges: Vec<GraphEdge> = Vec::with_capacity(connections.len());
        let mut adjacency_list = vec![Vec::new(); cities.len()];

        for connection in connections {
            let start = id_lookup.get(&connection.parent_city_id).copied();
            let end = id_lookup.get(&connection.child_city_id).copied();

            let (Some(start), Some(end)) = (start, end) else {
                warn!(
                    parent_city_id = connection.parent_city_id,
                    child_city_id = connection.child_city_id,
                    "Skipping connection referencing an unknown city"
                );
                continue;
            };

            if start == end {
                warn!(
                    city_id = connection.parent_city_id,
                    "Skipping connection from a city to itself"
                );
                continue;
            }

            let weight = cities[start]
                .position
                .euclidean_distance(&cities[end].position);

            let edge_id = edges.len();
            edges.push(GraphEdge::new(edge_id, start, end, weight));
            adjacency_list[start].push(edge_id);
            adjacency_list[end].push(edge_id);
        }

        // Neighbor iteration follows ascending city id, so equal-cost
        // searches settle on the same path every run.
        for (node, edge_ids) in adjacency_list.iter_mut().enumerate() {
            edge_ids.sort_by_key(|&edge_id| {
                let edge = &edges[edge_id];
                (cities[edge.adj_node(node)].id, edge_id)
            });
        }

        GraphStore {
            info,
            cities,
            edges,
            adjacency_list,
            id_lookup,
            name_lookup,
        }
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, node: usize) -> &City {
        &self.cities[node]
    }

    /// Case-sensitive exact match, the contract the route endpoints use.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.name_lookup.get(name).copied()
    }

    pub fn find_by_id(&self, id: u64) -> Option<usize> {
        self.id_lookup.get(&id).copied()
    }
}

impl Graph for GraphStore {
    type EdgeIterator<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn node_count(&self) -> usize {
        self.cities.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_edges_iter(&self, node: usize) -> Self::EdgeIterator<'_> {
        self.adjacency_list[node].iter().copied()
    }

    fn edge(&self, edge: usize) -> &GraphEdge {
        &self.edges[edge]
    }

    fn node_position(&self, node: usize) -> &Position {
        &self.cities[node].position
    }
}
