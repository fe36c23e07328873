//! The one outbound call: `POST {base_url}/ask`.

use tracing::debug;

use crate::api::error::ApiError;
use crate::api::transport::{SyncTransport, Transport};
use crate::api::types::{QuestionRequest, RagResponse};

/// Client for the backend question-answering endpoint.
///
/// Cheap to clone; each submission's worker thread takes its own copy.
#[derive(Debug, Clone)]
pub struct AskClient {
    base_url: String,
    transport: Transport,
}

impl AskClient {
    /// Client with the real HTTP transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Transport::default())
    }

    /// Client with an explicit transport (tests inject a fake here).
    pub fn with_transport(base_url: impl Into<String>, transport: Transport) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            transport,
        }
    }

    /// Configured backend base URL (for the settings view).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask one question. A single attempt: no retry, no backoff.
    ///
    /// Any 2xx body is parsed as a [`RagResponse`] and trusted; any non-2xx
    /// status or transport failure comes back as an [`ApiError`].
    pub fn ask_question(&self, request: &QuestionRequest) -> Result<RagResponse, ApiError> {
        let url = format!("{}/ask", self.base_url);
        let body = serde_json::to_string(request)?;
        debug!(url = %url, body_len = body.len(), "POST /ask");

        let raw = self
            .transport
            .post_json(&url, &[("Content-Type", "application/json")], &body)?;

        let response: RagResponse = serde_json::from_str(&raw)?;
        debug!(
            sources = response.sources.len(),
            answer_len = response.answer.len(),
            "ask settled"
        );
        Ok(response)
    }
}
