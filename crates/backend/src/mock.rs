//! Mock backend implementation
//!
//! Serves canned responses and records every call (capability tag plus
//! bearer token), so handler tests can assert both what was forwarded and
//! that rejected requests never reached the backend.

use std::sync::Mutex;

use bytes::Bytes;
use futures::StreamExt;
use serde_json::json;

use adviser_auth::Identity;

use crate::{BackendError, BackendService, ByteStream, SignInRequest, SignUpRequest};

/// In-memory backend double for tests
pub struct MockBackend {
    identity: Identity,
    password: String,
    chat_chunks: Vec<Vec<u8>>,
    chats: serde_json::Value,
    messages: serde_json::Value,
    /// When set, every call fails with this rejection
    reject: Option<(u16, Option<String>)>,
    calls: Mutex<Vec<String>>,
    bearer_tokens: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            identity: Identity {
                id: "user-mock".to_string(),
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
                role: "user".to_string(),
            },
            password: "correct-password".to_string(),
            chat_chunks: vec![
                b"data: {\"delta\":\"mock \"}\n\n".to_vec(),
                b"data: {\"delta\":\"reply\"}\n\n".to_vec(),
            ],
            chats: json!([]),
            messages: json!([]),
            reject: None,
            calls: Mutex::new(Vec::new()),
            bearer_tokens: Mutex::new(Vec::new()),
        }
    }

    /// Identity returned for successful authentication
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    /// The only password `sign_in` accepts
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Chunks streamed by `chat`, relayed in order
    pub fn with_chat_chunks(mut self, chunks: Vec<Vec<u8>>) -> Self {
        self.chat_chunks = chunks;
        self
    }

    pub fn with_chats(mut self, chats: serde_json::Value) -> Self {
        self.chats = chats;
        self
    }

    pub fn with_messages(mut self, messages: serde_json::Value) -> Self {
        self.messages = messages;
        self
    }

    /// Make every call fail with the given rejection.
    pub fn rejecting(mut self, status: u16, message: Option<&str>) -> Self {
        self.reject = Some((status, message.map(str::to_string)));
        self
    }

    /// The identity successful authentication yields
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Capability tags of every call received, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Bearer tokens attached to protected calls, in order
    pub fn bearer_tokens(&self) -> Vec<String> {
        self.bearer_tokens.lock().unwrap().clone()
    }

    fn record(&self, capability: &str) {
        self.calls.lock().unwrap().push(capability.to_string());
    }

    fn record_bearer(&self, token: &str) {
        self.bearer_tokens.lock().unwrap().push(token.to_string());
    }

    fn rejection(&self) -> Option<BackendError> {
        self.reject
            .as_ref()
            .map(|(status, message)| BackendError::Rejected {
                status: *status,
                message: message.clone(),
            })
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BackendService for MockBackend {
    async fn sign_in(&self, request: &SignInRequest) -> Result<Identity, BackendError> {
        self.record("sign-in");
        if let Some(err) = self.rejection() {
            return Err(err);
        }

        if request.email == self.identity.email && request.password == self.password {
            Ok(self.identity.clone())
        } else {
            Err(BackendError::Rejected {
                status: 401,
                message: Some("invalid email or password".to_string()),
            })
        }
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, BackendError> {
        self.record("sign-up");
        if let Some(err) = self.rejection() {
            return Err(err);
        }

        Ok(Identity {
            id: self.identity.id.clone(),
            email: request.email.clone(),
            name: request.name.clone(),
            role: self.identity.role.clone(),
        })
    }

    async fn chat(&self, token: &str, _body: Bytes) -> Result<ByteStream, BackendError> {
        self.record("chat");
        self.record_bearer(token);
        if let Some(err) = self.rejection() {
            return Err(err);
        }

        let chunks: Vec<Result<Bytes, BackendError>> = self
            .chat_chunks
            .iter()
            .map(|c| Ok(Bytes::from(c.clone())))
            .collect();

        Ok(futures::stream::iter(chunks).boxed())
    }

    async fn list_chats(&self, token: &str) -> Result<serde_json::Value, BackendError> {
        self.record("get-chats");
        self.record_bearer(token);
        if let Some(err) = self.rejection() {
            return Err(err);
        }

        Ok(self.chats.clone())
    }

    async fn get_messages(
        &self,
        token: &str,
        _body: serde_json::Value,
    ) -> Result<serde_json::Value, BackendError> {
        self.record("get-messages");
        self.record_bearer(token);
        if let Some(err) = self.rejection() {
            return Err(err);
        }

        Ok(self.messages.clone())
    }
}
