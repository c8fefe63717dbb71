//! Client configuration

use std::path::PathBuf;

/// Default backend root
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default location of the persisted auth token
pub const DEFAULT_TOKEN_PATH: &str = "./.oxy/token.json";

/// Client configuration for connecting to the portal backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:5000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// File holding the persisted auth token
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
        }
    }

    /// Load from environment variables, falling back to defaults
    ///
    /// - `OXY_API_URL`
    /// - `OXY_TIMEOUT_SECS`
    /// - `OXY_TOKEN_PATH`
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OXY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout: std::env::var("OXY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            token_path: std::env::var("OXY_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_PATH)),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the token file location
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.token_path, PathBuf::from("./.oxy/token.json"));
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.5:5000/api")
            .with_timeout(5)
            .with_token_path("/tmp/oxy.json");
        assert_eq!(config.base_url, "http://10.0.0.5:5000/api");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token_path, PathBuf::from("/tmp/oxy.json"));
    }
}
