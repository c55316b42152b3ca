//! Adviser gateway composition root
//!
//! Assembles the session config, backend client, and route table into a
//! single axum application.

use std::sync::Arc;

use axum::Router;

use adviser_auth::SessionConfig;
use adviser_backend::HttpBackend;
use adviser_common::Config;

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the application router against the configured backend.
pub fn create_app(config: &Config) -> Router {
    let state = AppState {
        session: SessionConfig {
            jwt_secret: config.jwt_secret.clone(),
        },
        backend: Arc::new(HttpBackend::new(config.backend_api_url.clone())),
    };

    router(state)
}

/// Build the router for a prepared state (tests inject a mock backend here).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(routes::routes())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
