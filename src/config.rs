//! Backend endpoint resolution.
//!
//! Resolution priority:
//! 1. `--api-url <url>` flag (highest)
//! 2. `CREDITRUST_API_URL` environment variable
//! 3. Local development default

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "CREDITRUST_API_URL";

/// Default backend address (local FastAPI development server).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Resolve the backend base URL.
///
/// # Arguments
/// * `explicit` - Optional base URL from the `--api-url` flag
pub fn resolve_api_url(explicit: Option<String>) -> String {
    if let Some(url) = explicit {
        return url;
    }

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            return url;
        }
    }

    DEFAULT_API_URL.to_string()
}
