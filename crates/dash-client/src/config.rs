//! Client configuration: base path and request timeout.

use std::time::Duration;

/// HTTP configuration for [`crate::ApiClient`].
///
/// This is read-only after construction; the built client is safe to
/// share across concurrent fetches.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL up to and including the API prefix, no trailing slash,
    /// e.g. `http://127.0.0.1:8000/api`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with the default 10 s timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
