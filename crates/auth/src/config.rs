//! Session signing configuration

/// Session signing configuration
///
/// The secret is process-wide, read-only after startup.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub jwt_secret: String,
}
