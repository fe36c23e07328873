//! Error taxonomy for the backend exchange.
//!
//! Every failure settles the active query as an error message near the
//! input; nothing here is retried and nothing escapes to a global handler.

/// Errors from one `/ask` call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status. `message` carries the status text.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body was 2xx but not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Json(String),

    /// I/O failure while reading the response body.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Json(err.to_string())
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => ApiError::Http {
                status: code,
                message: response.status_text().to_string(),
            },
            ureq::Error::Transport(err) => ApiError::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_carries_status_text() {
        let err = ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Server Error"));
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_json_error_from_serde() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ApiError = bad.unwrap_err().into();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
