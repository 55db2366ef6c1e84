use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use catalog_server::{
    cors_layer,
    health::{healthz, livez},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::lookup::{channel_search, id_deidentify, schema_validate},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/schema/validate", post(schema_validate))
        .route("/channel/search", post(channel_search))
        .route("/id/deidentify", post(id_deidentify))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
