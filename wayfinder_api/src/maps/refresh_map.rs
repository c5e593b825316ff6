use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use wayfinder_core::graph::Graph;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RefreshResponse {
    map: String,
    cities: usize,
    connections: usize,
}

/// Rebuilds the map's Navigator from a fresh fetch and swaps it in. Requests
/// started against the previous graph keep it until they finish.
pub async fn refresh_map_handler(
    State(state): State<Arc<AppState>>,
    Path(map_id): Path<u64>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let navigator = state.registry.refresh(map_id).await?;

    Ok(Json(RefreshResponse {
        map: navigator.info().name.clone(),
        cities: navigator.store().cities().len(),
        connections: navigator.store().edge_count(),
    }))
}
