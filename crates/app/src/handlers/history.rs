//! Chat history proxy handlers
//!
//! Implements:
//! - GET /get-chats — relay the caller's chat list from the backend
//! - POST /get-messages — relay messages for a chat from the backend
//!
//! Both require a session; authentication policy is decided here centrally,
//! not re-derived per handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use adviser_auth::SessionUser;
use adviser_backend::BackendError;
use adviser_common::{Error, Result};

use crate::state::AppState;

/// Relay a backend rejection: the backend's own status with its error
/// payload wrapped as `{"error": ...}`.
fn relay_rejection(capability: &'static str, status: u16, message: Option<String>) -> Response {
    tracing::warn!(capability, status, "backend rejected request");
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        Json(json!({ "error": message.unwrap_or_default() })),
    )
        .into_response()
}

/// GET /get-chats — list the caller's chats
pub async fn get_chats(
    SessionUser(session): SessionUser,
    State(state): State<AppState>,
) -> Result<Response> {
    match state.backend.list_chats(&session.token).await {
        Ok(chats) => Ok((StatusCode::OK, Json(chats)).into_response()),
        Err(BackendError::Rejected { status, message }) => {
            Ok(relay_rejection("get-chats", status, message))
        }
        Err(e) => {
            tracing::error!(capability = "get-chats", error = %e, "backend call failed");
            Err(Error::Internal(e.to_string()))
        }
    }
}

/// POST /get-messages — fetch messages for a chat
///
/// The request body is arbitrary JSON owned by the client and backend;
/// the gateway forwards it untouched.
pub async fn get_messages(
    SessionUser(session): SessionUser,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response> {
    match state.backend.get_messages(&session.token, body).await {
        Ok(messages) => Ok((StatusCode::OK, Json(messages)).into_response()),
        Err(BackendError::Rejected { status, message }) => {
            Ok(relay_rejection("get-messages", status, message))
        }
        Err(e) => {
            tracing::error!(capability = "get-messages", error = %e, "backend call failed");
            Err(Error::Internal(e.to_string()))
        }
    }
}
