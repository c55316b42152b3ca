//! Chat proxy handler
//!
//! Implements POST /chat: forwards the opaque chat request to the backend
//! with the caller's bearer credential and relays the streamed response
//! body unaltered; chunks pass through as they arrive, never buffered.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use adviser_auth::SessionUser;
use adviser_backend::BackendError;
use adviser_common::{Error, Result};

use crate::state::AppState;

/// POST /chat — stream a chat completion through from the backend
pub async fn chat(
    SessionUser(session): SessionUser,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response> {
    let stream = match state.backend.chat(&session.token, body).await {
        Ok(stream) => stream,
        Err(BackendError::Rejected { status, .. }) => {
            tracing::warn!(capability = "chat", status, "backend refused chat stream");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            return Ok((status, "Failed to stream chat completion").into_response());
        }
        Err(e) => {
            tracing::error!(capability = "chat", error = %e, "backend call failed");
            return Err(Error::Internal(e.to_string()));
        }
    };

    // Force event-stream semantics on the relayed response regardless of
    // what the backend declared
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(stream))
        .map_err(|e| Error::Internal(format!("failed to build stream response: {e}")))?;

    Ok(response)
}
