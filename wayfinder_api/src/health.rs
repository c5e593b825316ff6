use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthDetails {
    loaded_maps: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    details: HealthDetails,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        details: HealthDetails {
            loaded_maps: state.registry.loaded_maps().await,
        },
    })
}
