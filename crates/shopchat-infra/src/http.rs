//! HttpChatClient -- concrete [`ChatTransport`] implementation over reqwest.
//!
//! Posts one JSON request per turn to `{api_base}/chat/`. No retry and no
//! widget-side cancellation; a 30 second client timeout bounds how long a
//! turn can hang. Non-success status codes and transport-level errors both
//! surface as [`TransportError`] -- the controller collapses the two.

use std::time::Duration;

use shopchat_core::transport::ChatTransport;
use shopchat_types::error::TransportError;
use shopchat_types::wire::{ChatRequest, ChatReply};

/// HTTP client for the backend chat endpoint.
pub struct HttpChatClient {
    client: reqwest::Client,
    api_base: String,
}

impl HttpChatClient {
    /// Upper bound on one turn, connect included.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client for the given API base URL
    /// (e.g. `http://localhost:8000/api/v1`).
    pub fn new(api_base: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// The chat endpoint URL.
    fn url(&self) -> String {
        format!("{}/chat/", self.api_base.trim_end_matches('/'))
    }
}

impl ChatTransport for HttpChatClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let response = self
            .client
            .post(self.url())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Deserialization(e.to_string()))
    }
}
