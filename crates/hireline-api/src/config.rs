//! Access-layer configuration loaded from environment variables.
//!
//! Both settings have defaults so the client can run with zero
//! configuration against a local development store.

use hireline_shared::constants::DEFAULT_API_URL;

/// Access-layer configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote candidate store.
    /// Env: `HIRELINE_API_URL`
    /// Default: `http://localhost:3001`
    pub base_url: String,

    /// Artificial delay applied before every call, in milliseconds.
    /// Env: `HIRELINE_API_DELAY_MS`
    /// Default: `0`
    pub delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            delay_ms: 0,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("HIRELINE_API_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        if let Ok(val) = std::env::var("HIRELINE_API_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.delay_ms = ms,
                Err(_) => {
                    tracing::warn!(value = %val, "Invalid HIRELINE_API_DELAY_MS, using default");
                }
            }
        }

        config
    }
}
