//! UDP upstream client (RFC 1035 §4.2.1)
//!
//! One transient socket per query: bind an ephemeral port, connect to the
//! resolver, send once, receive once. Replies are limited to 512 bytes
//! unless configured otherwise; there is no EDNS(0) negotiation.

use async_trait::async_trait;
use dns_relay_application::ports::UpstreamClient;
use dns_relay_domain::wire::MAX_UDP_MESSAGE_SIZE;
use dns_relay_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct UdpUpstreamClient {
    server_addr: SocketAddr,
    timeout: Duration,
    max_response_size: usize,
}

impl UdpUpstreamClient {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            timeout: DEFAULT_TIMEOUT,
            max_response_size: MAX_UDP_MESSAGE_SIZE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_response_size(mut self, max_response_size: usize) -> Self {
        self.max_response_size = max_response_size;
        self
    }

    fn unreachable(&self, e: std::io::Error) -> DomainError {
        DomainError::UpstreamUnreachable {
            server: self.server_addr.to_string(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamClient for UdpUpstreamClient {
    async fn query(&self, datagram: &[u8]) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::Io(format!("Failed to bind UDP socket: {}", e)))?;

        // Connected socket: datagrams from other peers never reach recv()
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.unreachable(e))?;

        let bytes_sent = socket.send(datagram).await.map_err(|e| self.unreachable(e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.max_response_size];

        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::UpstreamTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| self.unreachable(e))?;

        recv_buf.truncate(bytes_received);
        validate_response_id(datagram, &recv_buf, self.server_addr)?;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn server(&self) -> String {
        self.server_addr.to_string()
    }
}

/// The reply must carry the transaction ID of the query it answers.
fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    let (Some(query_id), Some(response_id)) = (query.get(..2), response.get(..2)) else {
        return Err(DomainError::MalformedResponse(format!(
            "reply from {} too short to carry a transaction ID",
            server
        )));
    };

    if query_id != response_id {
        return Err(DomainError::MalformedResponse(format!(
            "transaction ID mismatch from {}: sent {:02x}{:02x}, got {:02x}{:02x}",
            server, query_id[0], query_id[1], response_id[0], response_id[1]
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
