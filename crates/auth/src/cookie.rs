//! Session cookie encoding and parsing
//!
//! The credential is stored client-side as an HTTP-only cookie scoped to
//! the entire site. Storage lifetime is 7 days, independent of the 1-day
//! claim expiry embedded in the token itself.

use axum::http::{HeaderMap, HeaderValue};

use crate::error::AuthError;

/// Cookie name holding the session credential
pub const SESSION_COOKIE: &str = "token";

/// Cookie storage lifetime: 7 days
pub const COOKIE_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Extract the session credential from a request's cookie header, if present.
pub fn parse_session_cookie(headers: &HeaderMap) -> Option<String> {
    parse_cookie(headers, SESSION_COOKIE)
}

fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie = headers.get("cookie").or_else(|| headers.get("Cookie"))?;
    let s = cookie.to_str().ok()?;
    for part in s.split(';') {
        let p = part.trim();
        if let Some(eq) = p.find('=') {
            let (k, v) = p.split_at(eq);
            if k == name {
                return Some(v[1..].to_string());
            }
        }
    }
    None
}

/// `Set-Cookie` value storing the session credential.
///
/// Attributes: HttpOnly, Secure, SameSite=Strict, Path=/, Max-Age=604800.
pub fn session_cookie(token: &str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={token}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}"
    ))
    .map_err(|e| {
        tracing::error!(error = %e, "Session token is not a valid cookie value");
        AuthError::IssueFailure
    })
}

/// `Set-Cookie` value destroying the session cookie (empty value,
/// immediate expiry).
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static(
        "token=; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=0",
    )
}
