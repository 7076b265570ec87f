use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::relay::RelayConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::wire::HEADER_LEN;

const LOCAL_CONFIG_PATH: &str = "dns-relay.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-relay/config.toml";

/// Main configuration structure for the relay
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening endpoint
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolver
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Split/merge behaviour
    #[serde(default)]
    pub relay: RelayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-relay.toml in current directory
    /// 3. /etc/dns-relay/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_candidates(
            path,
            &[LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH],
            cli_overrides,
        )
    }

    /// `candidates` are tried in order when no explicit path is given.
    fn load_with_candidates(
        path: Option<&str>,
        candidates: &[&str],
        cli_overrides: CliOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match candidates.iter().find(|c| Path::new(c).exists()) {
                Some(found) => Self::from_file(found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(resolver) = overrides.resolver {
            self.upstream.resolver = resolver;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        self.server.listen_addr()?;
        self.upstream.resolver_addr()?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.max_datagram_size < HEADER_LEN {
            return Err(ConfigError::Validation(format!(
                "max_datagram_size must be at least {} bytes",
                HEADER_LEN
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resolver: Option<String>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}
