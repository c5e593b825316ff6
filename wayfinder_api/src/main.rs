mod cities;
mod error;
mod health;
mod maps;
mod registry;
mod route;
mod state;
mod suggestions;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};
use wayfinder_map_client::client::MapServiceClient;

use crate::registry::MapRegistry;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_ADDR: &str = "127.0.0.1:4243";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let map_client = MapServiceClient::from_env()?;

    let state = Arc::new(AppState {
        registry: MapRegistry::new(map_client),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/maps/{map_id}/routes", post(route::route::route_handler))
        .route(
            "/maps/{map_id}/cities",
            get(cities::get_cities::get_cities_handler),
        )
        .route(
            "/maps/{map_id}/cities/closest",
            get(cities::closest::closest_city_handler),
        )
        .route(
            "/maps/{map_id}/refresh",
            post(maps::refresh_map::refresh_map_handler),
        )
        .route(
            "/suggestions/maps/{map_id}",
            get(suggestions::get_suggestions::get_suggestions_handler),
        )
        .route("/healthz", get(health::health_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let addr = std::env::var("WAYFINDER_ADDR").unwrap_or_else(|_| String::from(DEFAULT_ADDR));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, "Wayfinder API listening");

    serve(listener, app).await?;

    Ok(())
}
