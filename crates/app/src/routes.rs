//! Route definitions for the gateway API

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, chat, history};
use crate::state::AppState;

/// Session lifecycle routes (no session required)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-in", post(auth::sign_in))
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/sign-out", post(auth::sign_out))
}

/// Session-protected proxy routes
fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/get-chats", get(history::get_chats))
        .route("/get-messages", post(history::get_messages))
}

/// Create all gateway routes
pub fn routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(proxy_routes())
}
