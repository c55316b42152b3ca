//! Session lifecycle handlers
//!
//! Implements:
//! - POST /auth/sign-in — verify credentials against the backend, mint a session
//! - POST /auth/sign-up — register against the backend, mint a session
//! - POST /auth/sign-out — clear the session cookie

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use adviser_auth::{clear_session_cookie, issue_session_token, session_cookie, Identity};
use adviser_backend::{BackendError, SignInRequest, SignUpRequest};
use adviser_common::{Error, Result, ValidatedJson};

use crate::state::AppState;

/// Request body for sign-in
#[derive(Debug, Deserialize, Validate)]
pub struct SignInBody {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Request body for sign-up
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpBody {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Build the success response: `{"success":true}` plus the session cookie.
fn session_response(user: &Identity, state: &AppState) -> Result<Response> {
    let token = issue_session_token(user, &state.session)
        .map_err(|_| Error::Internal("failed to issue session token".to_string()))?;
    let cookie = session_cookie(&token)
        .map_err(|_| Error::Internal("failed to encode session cookie".to_string()))?;

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(json!({ "success": true })),
    )
        .into_response())
}

/// POST /auth/sign-in — authenticate against the backend and mint a session
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SignInBody>,
) -> Result<Response> {
    let request = SignInRequest {
        email: body.email,
        password: body.password,
    };

    match state.backend.sign_in(&request).await {
        Ok(user) => session_response(&user, &state),
        Err(BackendError::Rejected { status, message }) => {
            tracing::debug!(capability = "sign-in", status, "backend rejected credentials");
            let message = message.unwrap_or_else(|| "Invalid credentials".to_string());
            Ok((StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response())
        }
        Err(e) => {
            tracing::error!(capability = "sign-in", error = %e, "backend call failed");
            Err(Error::Internal(e.to_string()))
        }
    }
}

/// POST /auth/sign-up — register against the backend and mint a session
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SignUpBody>,
) -> Result<Response> {
    let request = SignUpRequest {
        email: body.email,
        password: body.password,
        name: body.name,
    };

    match state.backend.sign_up(&request).await {
        Ok(user) => session_response(&user, &state),
        Err(BackendError::Rejected { status, message }) => {
            tracing::debug!(capability = "sign-up", status, "backend rejected registration");
            let message = message.unwrap_or_else(|| "Registration failed".to_string());
            Ok((StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response())
        }
        Err(e) => {
            tracing::error!(capability = "sign-up", error = %e, "backend call failed");
            Err(Error::Internal(e.to_string()))
        }
    }
}

/// POST /auth/sign-out — clear the session cookie
///
/// Always succeeds, regardless of prior session state. The gateway holds
/// no server-side session, so there is nothing else to revoke.
pub async fn sign_out() -> Response {
    (
        StatusCode::OK,
        [(SET_COOKIE, clear_session_cookie())],
        Json(json!({ "success": true })),
    )
        .into_response()
}
