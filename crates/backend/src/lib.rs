//! Backend chat service client
//!
//! The backend owns user accounts, chat history, and AI completion; this
//! crate treats it as an opaque collaborator behind the `BackendService`
//! trait, with:
//! - `HttpBackend` — reqwest implementation against the configured base URL
//! - `MockBackend` — in-memory implementation recording calls for tests

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use serde::Serialize;
use thiserror::Error;

use adviser_auth::Identity;

pub mod http;
pub mod mock;

pub use http::HttpBackend;
pub use mock::MockBackend;

/// Backend call error
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    ///
    /// `message` carries the backend's own error payload where one could
    /// be read; callers fall back to a capability-specific default.
    #[error("backend rejected request with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

/// Byte stream relayed from the backend without buffering.
pub type ByteStream = BoxStream<'static, Result<Bytes, BackendError>>;

/// Credentials forwarded to `POST /v1/auth/signin`
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Registration data forwarded to `POST /v1/auth/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Operations the gateway proxies to the backend service.
///
/// Protected operations take the caller's raw session token and attach it
/// as a bearer credential; the backend verifies it independently.
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Authenticate existing credentials; returns the identity the backend
    /// asserts on success.
    async fn sign_in(&self, request: &SignInRequest) -> Result<Identity, BackendError>;

    /// Register a new account; returns the created identity on success.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, BackendError>;

    /// Start a chat completion, relaying the opaque request body verbatim.
    /// Returns the backend's streamed response body unbuffered.
    async fn chat(&self, token: &str, body: Bytes) -> Result<ByteStream, BackendError>;

    /// Fetch the caller's chat list.
    async fn list_chats(&self, token: &str) -> Result<serde_json::Value, BackendError>;

    /// Fetch messages for a chat; the request body is arbitrary JSON owned
    /// by the client and backend.
    async fn get_messages(
        &self,
        token: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, BackendError>;
}
