//! Session credential claims

use serde::{Deserialize, Serialize};

use crate::types::Identity;

/// Claims embedded in the session credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Display name
    pub name: String,
    /// Role granted by the backend
    pub role: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

impl SessionClaims {
    /// The identity asserted by these claims.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}
