//! Facility Dashboard Backend
//!
//! Aggregates the facility profile, bed capacity, doctor and triage reads of the facility API
//! into one render-ready dashboard per facility.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod source;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use models::Catalog;
use source::HttpDataSource;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<HttpDataSource>,
    pub catalog: Arc<Catalog>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/facilities/{id}/dashboard", get(api::get_dashboard))
        .route("/catalog", get(api::get_catalog));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
