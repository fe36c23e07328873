//! Synchronous HTTP transport.
//!
//! A small trait over "POST some JSON, get a body back" so the client can
//! be exercised in tests with [`FakeTransport`] instead of a live backend.

use std::io::Read;
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::transport_fake::FakeTransport;

/// Blocking HTTP transport.
pub trait SyncTransport: Send + Sync {
    /// POST a JSON body and return the raw response body.
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, ApiError>;
}

/// Real transport backed by `ureq`.
///
/// One attempt per call; the only resilience is the client-level timeout.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    /// Request timeout in seconds.
    timeout: u64,
}

impl UreqTransport {
    /// Create a transport with the default timeout (30 s).
    pub fn new() -> Self {
        Self { timeout: 30 }
    }

    /// Create a transport with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout: timeout_secs,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTransport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, ApiError> {
        let mut request = ureq::request("POST", url).timeout(Duration::from_secs(self.timeout));

        for (key, value) in headers {
            request = request.set(key, value);
        }

        let response = request.send_string(body)?;

        // ureq only errors on >= 400; anything outside 2xx still counts as
        // a failed call for this contract.
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ApiError::Http {
                status,
                message: response.status_text().to_string(),
            });
        }

        let mut reader = response.into_reader();
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        Ok(body)
    }
}

/// Concrete transport enum.
///
/// Wraps both implementations, avoiding dyn compatibility issues and
/// keeping [`crate::api::AskClient`] cheaply cloneable into worker threads.
#[derive(Debug, Clone)]
pub enum Transport {
    Real(UreqTransport),
    Fake(FakeTransport),
}

impl SyncTransport for Transport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, ApiError> {
        match self {
            Transport::Real(t) => t.post_json(url, headers, body),
            Transport::Fake(t) => t.post_json(url, headers, body),
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Real(UreqTransport::new())
    }
}
