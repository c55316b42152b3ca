//! Verified session context

use crate::types::Identity;

/// A verified session attached to a request.
///
/// Carries the identity claims and the raw credential, which protected
/// handlers forward unchanged as a bearer token. The backend trusts the
/// same token independently, so no re-signing or translation occurs.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: Identity,
    pub token: String,
}
