use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfinder_core::error::RoutingError;
use wayfinder_map_client::client::MapClientError;

pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
    InternalServerError(String),
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        match error {
            RoutingError::CityNotFound(_) | RoutingError::NoPathFound { .. } => {
                ApiError::NotFound(error.to_string())
            }
            RoutingError::Cancelled => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl From<MapClientError> for ApiError {
    fn from(error: MapClientError) -> Self {
        ApiError::BadGateway(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message),
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
