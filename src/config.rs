//! Client configuration.
//!
//! Built from defaults, then the environment, then command-line flags.
//!
//! # Example
//!
//! ```
//! use ragchat::config::ClientConfig;
//!
//! let config = ClientConfig::default().with_base_url("http://10.0.0.5:5000");
//! assert_eq!(config.ask_url(), "http://10.0.0.5:5000/ask");
//! ```

use std::time::Duration;

/// Default answer service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Default streaming endpoint path
pub const DEFAULT_ASK_PATH: &str = "/ask";
/// Document previews are cut after this many characters by default
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Environment variable overriding the service address
pub const ENV_URL: &str = "RAGCHAT_URL";
/// Environment variable overriding the endpoint path
pub const ENV_ASK_PATH: &str = "RAGCHAT_ASK_PATH";
/// Environment variable overriding the preview length
pub const ENV_PREVIEW_CHARS: &str = "RAGCHAT_PREVIEW_CHARS";

/// Settings for talking to the answer service and rendering its output.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and port of the answer service
    pub base_url: String,
    /// Path of the streaming ask endpoint
    pub ask_path: String,
    /// Characters of a document shown before it is truncated
    pub preview_chars: usize,
    /// Give up connecting after this long (no limit when None)
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ask_path: DEFAULT_ASK_PATH.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service address. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the endpoint path. A missing leading slash is added.
    pub fn with_ask_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.ask_path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        self
    }

    /// Set the document preview length.
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Full URL of the streaming ask endpoint.
    pub fn ask_url(&self) -> String {
        format!("{}{}", self.base_url, self.ask_path)
    }

    /// Create config from `RAGCHAT_URL`, `RAGCHAT_ASK_PATH` and
    /// `RAGCHAT_PREVIEW_CHARS`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_URL) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }

        if let Ok(path) = std::env::var(ENV_ASK_PATH) {
            if !path.trim().is_empty() {
                config = config.with_ask_path(path.trim());
            }
        }

        if let Ok(raw) = std::env::var(ENV_PREVIEW_CHARS) {
            match raw.trim().parse::<usize>() {
                Ok(chars) if chars > 0 => config = config.with_preview_chars(chars),
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid {}", ENV_PREVIEW_CHARS);
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_ASK_PATH);
        std::env::remove_var(ENV_PREVIEW_CHARS);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.ask_url(), "http://localhost:5000/ask");
        assert_eq!(config.preview_chars, 500);
    }

    #[test]
    fn test_builder_normalizes_slashes() {
        let config = ClientConfig::new()
            .with_base_url("http://example.com/")
            .with_ask_path("v2/ask");
        assert_eq!(config.ask_url(), "http://example.com/v2/ask");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ENV_URL, "http://rag.internal:8080");
        std::env::set_var(ENV_ASK_PATH, "/query");
        std::env::set_var(ENV_PREVIEW_CHARS, "120");

        let config = ClientConfig::from_env();
        assert_eq!(config.ask_url(), "http://rag.internal:8080/query");
        assert_eq!(config.preview_chars, 120);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_invalid_preview() {
        clear_env();
        std::env::set_var(ENV_PREVIEW_CHARS, "lots");

        let config = ClientConfig::from_env();
        assert_eq!(config.preview_chars, DEFAULT_PREVIEW_CHARS);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables() {
        clear_env();
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }
}
