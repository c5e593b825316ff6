use wayfinder_core::city::{City, Connection, MapInfo};
use wayfinder_core::position::Position;

pub fn city(name: &str, id: u64, x: f64, y: f64) -> City {
    City {
        id,
        name: String::from(name),
        position: Position::new(x, y),
    }
}

pub fn connection(parent: u64, child: u64) -> Connection {
    Connection {
        parent_city_id: parent,
        child_city_id: child,
    }
}

pub fn map_info(name: &str) -> MapInfo {
    MapInfo {
        id: 1,
        name: String::from(name),
        size_x: 100.0,
        size_y: 100.0,
    }
}
