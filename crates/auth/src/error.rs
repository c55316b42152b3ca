//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
///
/// Missing, malformed, invalid, and expired credentials all collapse to
/// the same unauthenticated response; no cause detail reaches the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingCredential,
    InvalidCredential,
    IssueFailure,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingCredential | AuthError::InvalidCredential => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            AuthError::IssueFailure => {
                tracing::error!("Failed to issue session credential");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
