use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CityEntry {
    name: String,
    position_x: f64,
    position_y: f64,
}

#[derive(Serialize)]
pub struct CitiesResponse {
    cities: Vec<CityEntry>,
}

pub async fn get_cities_handler(
    State(state): State<Arc<AppState>>,
    Path(map_id): Path<u64>,
) -> Result<Json<CitiesResponse>, ApiError> {
    let navigator = state.registry.get_or_load(map_id).await?;

    let cities = navigator
        .store()
        .cities()
        .iter()
        .map(|city| CityEntry {
            name: city.name.clone(),
            position_x: city.position.x,
            position_y: city.position.y,
        })
        .collect();

    Ok(Json(CitiesResponse { cities }))
}
