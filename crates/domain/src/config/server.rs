use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Receive limit for client datagrams and upstream replies.
    #[serde(default = "default_max_datagram_size")]
    pub max_datagram_size: usize,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.port)
        } else {
            format!("{}:{}", self.bind_address, self.port)
        };
        addr.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid bind address '{}': {}", addr, e))
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            max_datagram_size: default_max_datagram_size(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    2053
}

fn default_max_datagram_size() -> usize {
    crate::wire::MAX_UDP_MESSAGE_SIZE
}
