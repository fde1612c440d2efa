pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state for the whole application
pub struct AppState {
    pub store: store::Store,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            store: store::Store::new(),
            config,
        })
    }
}

/// The full application router. `main` serves it; the integration tests
/// drive it directly, so both exercise the same routes and layers.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Movie Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
