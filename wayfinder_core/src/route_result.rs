use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::graph_store::GraphStore;
use crate::routing::path::Path;

/// Ordered city names in the wire shape the map front-ends expect: an object
/// keyed "0", "1", ... in path order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSequence(Vec<String>);

impl RouteSequence {
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Serialize for RouteSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, name) in self.0.iter().enumerate() {
            map.serialize_entry(&index.to_string(), name)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RouteResult {
    route: RouteSequence,
    distance: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    alternative_route: Option<RouteSequence>,

    #[serde(skip_serializing_if = "Option::is_none")]
    alternative_distance: Option<f64>,
}

impl RouteResult {
    pub fn route(&self) -> &RouteSequence {
        &self.route
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn alternative_route(&self) -> Option<&RouteSequence> {
        self.alternative_route.as_ref()
    }

    pub fn alternative_distance(&self) -> Option<f64> {
        self.alternative_distance
    }
}

/// Maps the search layer's node-index paths onto the name-based wire
/// contract. Distances are rounded to two decimals here and nowhere else.
pub struct RouteResultBuilder<'a> {
    store: &'a GraphStore,
}

impl<'a> RouteResultBuilder<'a> {
    pub fn new(store: &'a GraphStore) -> RouteResultBuilder<'a> {
        RouteResultBuilder { store }
    }

    pub fn build(&self, primary: &Path, alternative: Option<&Path>) -> RouteResult {
        RouteResult {
            route: self.sequence(primary),
            distance: round_distance(primary.distance()),
            alternative_route: alternative.map(|path| self.sequence(path)),
            alternative_distance: alternative.map(|path| round_distance(path.distance())),
        }
    }

    fn sequence(&self, path: &Path) -> RouteSequence {
        RouteSequence(
            path.nodes()
                .iter()
                .map(|&node| self.store.city(node).name.clone())
                .collect(),
        )
    }
}

fn round_distance(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}
