//! Shared application state
//!
//! Everything here is constructed once at startup and cloned cheaply into
//! each handler invocation. The relay keeps no per-request state anywhere.

use crate::config::Config;
use anyhow::Context;
use std::time::Duration;

/// Shared application state
///
/// `reqwest::Client` is internally reference-counted, so clones share one
/// connection pool across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client for outbound Gemini calls
    pub http_client: reqwest::Client,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Build the state from configuration
    ///
    /// The outbound client carries a bounded timeout so a stalled upstream
    /// call cannot hold a request open indefinitely.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.gemini.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeminiConfig, ServerConfig};

    #[test]
    fn test_state_builds_from_config() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            gemini: GeminiConfig::default(),
        };
        assert!(AppState::new(config).is_ok());
    }
}
