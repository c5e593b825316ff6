use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct SuggestionsQuery {
    query: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    suggestions: Vec<String>,
}

pub async fn get_suggestions_handler(
    State(state): State<Arc<AppState>>,
    Path(map_id): Path<u64>,
    Query(params): Query<SuggestionsQuery>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let navigator = state.registry.get_or_load(map_id).await?;

    let suggestions = navigator.suggest(&params.query, params.limit.unwrap_or(DEFAULT_LIMIT));

    Ok(Json(SuggestionsResponse { suggestions }))
}
