//! Session token signing and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::config::SessionConfig;
use crate::error::AuthError;
use crate::types::Identity;

/// Embedded credential lifetime: 1 day. Deliberately shorter than the
/// cookie's 7-day storage lifetime, so a stored-but-expired token is
/// rejected at verification even though the cookie persists.
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Mint a signed session token carrying the given identity claims.
///
/// Called only after the backend has confirmed credentials; this function
/// never verifies a password itself.
pub fn issue_session_token(user: &Identity, config: &SessionConfig) -> Result<String, AuthError> {
    let iat = chrono::Utc::now().timestamp() as u64;
    let claims = SessionClaims {
        sub: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::IssueFailure
    })
}

/// Validate a session token and extract its claims.
///
/// Fails when the signature does not match or the embedded expiry has
/// passed. Callers see no distinction between the failure causes.
pub fn verify_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidCredential
    })?;

    Ok(token_data.claims)
}
