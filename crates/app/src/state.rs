//! Application state shared by all handlers

use std::sync::Arc;

use axum::extract::FromRef;

use adviser_auth::SessionConfig;
use adviser_backend::BackendService;

/// Gateway state: the session signing config and the backend client.
/// Both are read-only after startup; the gateway holds no per-request
/// state beyond this.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionConfig,
    pub backend: Arc<dyn BackendService>,
}

impl FromRef<AppState> for SessionConfig {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
