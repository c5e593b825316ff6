#[cfg(test)]
pub mod test_map {

    use crate::city::{City, Connection, MapInfo};
    use crate::graph_store::GraphStore;
    use crate::position::Position;

    /// Small fixture map. 3-4-5 triangle coordinates keep every edge weight
    /// integral:
    ///
    ///   Whiterun (0,0) --5-- Riverwood (3,4) --5-- Ivarstead (6,8)
    ///   Whiterun (0,0) --6-- Rorikstead (6,0) --8-- Ivarstead (6,8)
    ///
    /// Winterhold (40,30) is loaded but has no connections.
    #[derive(Copy, Clone)]
    pub enum TestMapCity {
        Whiterun = 1,
        Riverwood = 2,
        Ivarstead = 3,
        Rorikstead = 4,
        Winterhold = 5,
    }

    impl TestMapCity {
        pub fn id(self) -> u64 {
            self as u64
        }

        /// Node index in the store built by `test_store`; the fixture loads
        /// its cities in id order.
        pub fn node(self) -> usize {
            self as usize - 1
        }
    }

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

    pub fn test_map_info() -> MapInfo {
        MapInfo {
            id: 1,
            name: String::from("skyrim"),
            size_x: 100.0,
            size_y: 100.0,
        }
    }

    pub fn test_cities() -> Vec<City> {
        vec![
            city("Whiterun", TestMapCity::Whiterun.id(), 0.0, 0.0),
            city("Riverwood", TestMapCity::Riverwood.id(), 3.0, 4.0),
            city("Ivarstead", TestMapCity::Ivarstead.id(), 6.0, 8.0),
            city("Rorikstead", TestMapCity::Rorikstead.id(), 6.0, 0.0),
            city("Winterhold", TestMapCity::Winterhold.id(), 40.0, 30.0),
        ]
    }

    pub fn test_connections() -> Vec<Connection> {
        vec![
            connection(TestMapCity::Whiterun.id(), TestMapCity::Riverwood.id()),
            connection(TestMapCity::Riverwood.id(), TestMapCity::Ivarstead.id()),
            connection(TestMapCity::Whiterun.id(), TestMapCity::Rorikstead.id()),
            connection(TestMapCity::Rorikstead.id(), TestMapCity::Ivarstead.id()),
        ]
    }

    pub fn test_store() -> GraphStore {
        GraphStore::build(test_map_info(), test_cities(), &test_connections())
    }
}
