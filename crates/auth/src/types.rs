//! Identity types

use serde::{Deserialize, Serialize};

/// Identity claims trusted once a session credential verifies.
///
/// Sourced verbatim from the backend's authentication response and
/// immutable for the lifetime of the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}
