use serde::{Deserialize, Serialize};

use wayfinder_core::city::{City, Connection, MapInfo};
use wayfinder_core::navigator::Navigator;
use wayfinder_core::position::Position;

/// One map as the map service serves it. The same shape is accepted from a
/// local file by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPayload {
    pub map: MapRecord,
    pub cities: Vec<CityRecord>,
    pub connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRecord {
    pub id: u64,
    pub name: String,
    pub size_x: f64,
    pub size_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: u64,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub parent_city_id: u64,
    pub child_city_id: u64,
}

impl From<MapRecord> for MapInfo {
    fn from(record: MapRecord) -> MapInfo {
        MapInfo {
            id: record.id,
            name: record.name,
            size_x: record.size_x,
            size_y: record.size_y,
        }
    }
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> City {
        City {
            id: record.id,
            name: record.name,
            position: Position::new(record.position_x, record.position_y),
        }
    }
}

impl From<ConnectionRecord> for Connection {
    fn from(record: ConnectionRecord) -> Connection {
        Connection {
            parent_city_id: record.parent_city_id,
            child_city_id: record.child_city_id,
        }
    }
}

impl MapPayload {
    /// Builds the routing facade for this map. Consumes the payload; the
    /// graph is the only representation kept around.
    pub fn into_navigator(self) -> Navigator {
        let info = MapInfo::from(self.map);
        let cities = self.cities.into_iter().map(City::from).collect();
        let connections: Vec<Connection> = self
            .connections
            .into_iter()
            .map(Connection::from)
            .collect();

        Navigator::new(info, cities, &connections)
    }
}
