//! Session credential model for the Adviser gateway
//!
//! Issues and verifies the signed session credential, encodes/parses the
//! session cookie, and provides an axum extractor that gates protected
//! routes for any state exposing `SessionConfig` via `FromRef<S>`.

mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod jwt;
mod types;

pub use claims::SessionClaims;
pub use config::SessionConfig;
pub use context::Session;
pub use cookie::{
    clear_session_cookie, parse_session_cookie, session_cookie, COOKIE_MAX_AGE_SECS,
    SESSION_COOKIE,
};
pub use error::AuthError;
pub use extractors::SessionUser;
pub use jwt::{issue_session_token, verify_session_token, SESSION_TTL_SECS};
pub use types::Identity;
