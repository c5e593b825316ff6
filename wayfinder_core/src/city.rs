use crate::position::Position;

/// A city as loaded from the map service. `id` is the identity, `name` is the
/// external key route requests use.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: u64,
    pub name: String,
    pub position: Position,
}

/// An undirected connection between two cities. The weight is never stored,
/// it is derived from the endpoint positions at graph build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Connection {
    pub parent_city_id: u64,
    pub child_city_id: u64,
}

/// Map metadata. The bounds are display-only, the id scopes which cities and
/// connections belong together.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub id: u64,
    pub name: String,
    pub size_x: f64,
    pub size_y: f64,
}
