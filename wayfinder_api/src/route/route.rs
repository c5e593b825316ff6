use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::info;

use wayfinder_core::navigator::RouteRequest;
use wayfinder_core::route_result::RouteResult;

use crate::error::ApiError;
use crate::state::AppState;

pub struct RouteResponse(RouteResult);

impl IntoResponse for RouteResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

#[derive(Deserialize)]
pub struct RouteRequestBody {
    startpoint: String,
    endpoint: String,
}

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    Path(map_id): Path<u64>,
    Json(body): Json<RouteRequestBody>,
) -> Result<RouteResponse, ApiError> {
    if body.startpoint.is_empty() || body.endpoint.is_empty() {
        return Err(ApiError::BadRequest(String::from(
            "Start and end cities are required",
        )));
    }

    info!(
        map_id,
        startpoint = %body.startpoint,
        endpoint = %body.endpoint,
        "Calculating route"
    );

    let navigator = state.registry.get_or_load(map_id).await?;

    let result = navigator.route(&RouteRequest {
        startpoint: body.startpoint,
        endpoint: body.endpoint,
    })?;

    Ok(RouteResponse(result))
}
