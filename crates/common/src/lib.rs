//! Shared utilities, configuration, and error handling for the Adviser gateway
//!
//! This crate provides common functionality used across the gateway:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
