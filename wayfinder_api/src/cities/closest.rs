use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ClosestQuery {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
pub struct ClosestCityResponse {
    id: u64,
    name: String,
    position_x: f64,
    position_y: f64,
}

pub async fn closest_city_handler(
    State(state): State<Arc<AppState>>,
    Path(map_id): Path<u64>,
    Query(query): Query<ClosestQuery>,
) -> Result<Json<ClosestCityResponse>, ApiError> {
    let navigator = state.registry.get_or_load(map_id).await?;

    let city = navigator
        .closest_city(query.x, query.y)
        .ok_or_else(|| ApiError::NotFound(String::from("The map has no cities")))?;

    Ok(Json(ClosestCityResponse {
        id: city.id,
        name: city.name.clone(),
        position_x: city.position.x,
        position_y: city.position.y,
    }))
}
