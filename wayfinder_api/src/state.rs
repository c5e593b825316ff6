use crate::registry::MapRegistry;

pub struct AppState {
    pub registry: MapRegistry,
}
