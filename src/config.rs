//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The relay holds no secrets here: the Gemini API
//! key arrives with each request and is never part of the configuration.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Gemini upstream configuration
    pub gemini: GeminiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Gemini upstream configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Model name used for generation requests
    pub model: String,
    /// Gemini API base URL
    ///
    /// Overridable so tests can point the relay at a local mock server.
    pub base_url: String,
    /// Timeout for outbound Gemini requests (in seconds)
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3001),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            gemini: GeminiConfig::from_env(),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GeminiConfig {
    /// Load Gemini settings from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: env::var("GEMINI_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}
