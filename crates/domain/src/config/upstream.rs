use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver as `ip:port`.
    #[serde(default)]
    pub resolver: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn resolver_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.resolver.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream resolver configured".to_string(),
            ));
        }
        self.resolver.parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid resolver address '{}' (expected ip:port): {}",
                self.resolver, e
            ))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolver: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}
