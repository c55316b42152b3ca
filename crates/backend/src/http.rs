//! Reqwest implementation of the backend client
//!
//! One outbound call per gateway request, awaited (or incrementally
//! relayed for chat). No retry, backoff, or timeout policy; a slow
//! backend stalls only the request that hit it.

use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use reqwest::{header, Client};
use serde::Deserialize;

use adviser_auth::Identity;

use crate::{BackendError, BackendService, ByteStream, SignInRequest, SignUpRequest};

/// Backend error payload shape, where one exists
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the backend chat service
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Read a non-success response into a `Rejected` error, preserving the
    /// backend's own error message where one can be extracted.
    async fn rejection(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = if body.is_empty() {
            None
        } else if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
            Some(parsed.error)
        } else {
            Some(body)
        };

        BackendError::Rejected { status, message }
    }
}

#[async_trait::async_trait]
impl BackendService for HttpBackend {
    async fn sign_in(&self, request: &SignInRequest) -> Result<Identity, BackendError> {
        let url = format!("{}/v1/auth/signin", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("sign-in request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Identity>()
            .await
            .map_err(|e| BackendError::Decode(format!("sign-in response: {e}")))
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, BackendError> {
        let url = format!("{}/v1/auth/signup", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("sign-up request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Identity>()
            .await
            .map_err(|e| BackendError::Decode(format!("sign-up response: {e}")))
    }

    async fn chat(&self, token: &str, body: Bytes) -> Result<ByteStream, BackendError> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("chat request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // The stream error path carries no body; the handler substitutes
            // its capability-specific message.
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                message: None,
            });
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| BackendError::Transport(format!("stream read error: {e}")))
            .boxed();

        Ok(stream)
    }

    async fn list_chats(&self, token: &str) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}/api/get-chats", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("get-chats request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BackendError::Decode(format!("get-chats response: {e}")))
    }

    async fn get_messages(
        &self,
        token: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}/api/get-messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("get-messages request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BackendError::Decode(format!("get-messages response: {e}")))
    }
}
