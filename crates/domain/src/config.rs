//! Configuration structures
//!
//! Plain serde-derived configuration consumed by the infrastructure layer.
//! Loading (environment variables, config files) lives in
//! `workbridge-infra::config`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_WAKEUP_CHANNEL};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// HTTP API pipeline configuration
    pub api: ApiConfig,
    /// Wake-up bridge configuration
    pub wakeup: WakeupConfig,
}

/// Configuration for the HTTP API pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL all request paths are resolved against
    /// (e.g., "https://admin.example.com")
    pub base_url: String,
    /// Transport timeout in seconds; expiry is a transport-level failure
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Configuration for the wake-up bridge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WakeupConfig {
    /// Name of the channel between the bridge and the application layer
    pub channel_name: String,
}

impl Default for WakeupConfig {
    fn default() -> Self {
        Self { channel_name: DEFAULT_WAKEUP_CHANNEL.to_string() }
    }
}
