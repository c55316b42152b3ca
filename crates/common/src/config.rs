//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables once at startup
//! and passed down to handlers as an explicit value, so no handler reads
//! the environment ad hoc.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Secret used to sign and verify session credentials
    pub jwt_secret: String,

    /// Base URL of the backend chat service
    pub backend_api_url: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` and `BACKEND_API_URL` are required; a missing value is a
    /// fatal startup condition, not a per-request error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,

            backend_api_url: env::var("BACKEND_API_URL")
                .map_err(|_| anyhow::anyhow!("BACKEND_API_URL is required"))?,

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "adviser=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
