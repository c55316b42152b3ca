//! Axum extractor for session-protected routes
//!
//! Generic over any state `S` where `SessionConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::config::SessionConfig;
use crate::context::Session;
use crate::cookie::parse_session_cookie;
use crate::error::AuthError;
use crate::jwt::verify_session_token;

/// Authenticated session extractor.
///
/// Reads the stored credential from the request's cookie header, verifies
/// it, and yields the identity claims plus the raw token. Requests with a
/// missing or invalid credential are rejected with a uniform 401 before
/// the handler body runs, so no backend call is made for them.
#[derive(Debug)]
pub struct SessionUser(pub Session);

impl<S> FromRequestParts<S> for SessionUser
where
    SessionConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = SessionConfig::from_ref(state);

        let token = parse_session_cookie(&parts.headers).ok_or(AuthError::MissingCredential)?;
        let claims = verify_session_token(&token, &config)?;

        Ok(SessionUser(Session {
            user: claims.identity(),
            token,
        }))
    }
}
