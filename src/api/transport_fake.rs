//! Fake transport for testing.
//!
//! Returns fixture strings instead of making real HTTP calls, and records
//! every request so tests can assert that blank submissions never reach
//! the network.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::transport::SyncTransport;

/// One recorded call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

/// Fake transport driven by canned fixtures.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    /// 2xx response body to return.
    response_body: String,
    /// Non-2xx status to simulate, with its status text.
    status: Option<(u16, String)>,
    /// Network error message to return instead of a response.
    error_message: Option<String>,
    /// Artificial latency before settling (for overlap/cancellation tests).
    delay: Option<Duration>,
    /// Every request seen, in order.
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeTransport {
    /// Respond with the given 2xx body.
    pub fn with_response(body: &str) -> Self {
        Self {
            response_body: body.to_string(),
            ..Self::default()
        }
    }

    /// Fail with the given non-2xx status.
    pub fn with_status(status: u16, status_text: &str) -> Self {
        Self {
            status: Some((status, status_text.to_string())),
            ..Self::default()
        }
    }

    /// Fail with a network-level error.
    pub fn with_network_error(msg: &str) -> Self {
        Self {
            error_message: Some(msg.to_string()),
            ..Self::default()
        }
    }

    /// Add artificial latency before each call settles.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }

    /// Snapshot of every call made so far.
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl SyncTransport for FakeTransport {
    fn post_json(
        &self,
        url: &str,
        _headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, ApiError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(RecordedRequest {
                url: url.to_string(),
                body: body.to_string(),
            });

        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if let Some(ref msg) = self.error_message {
            return Err(ApiError::Network(msg.clone()));
        }
        if let Some((status, ref text)) = self.status {
            return Err(ApiError::Http {
                status,
                message: text.clone(),
            });
        }
        Ok(self.response_body.clone())
    }
}
