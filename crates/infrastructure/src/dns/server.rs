use dns_relay_application::services::build_servfail;
use dns_relay_application::use_cases::RelayQueryUseCase;
use dns_relay_domain::wire::MAX_UDP_MESSAGE_SIZE;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Client-facing UDP listener. Packets are relayed one at a time; a failed
/// packet is logged and dropped (or answered with SERVFAIL when enabled).
pub struct RelayServer {
    socket: UdpSocket,
    use_case: Arc<RelayQueryUseCase>,
    servfail_on_error: bool,
    max_datagram_size: usize,
}

impl RelayServer {
    pub async fn bind(addr: SocketAddr, use_case: Arc<RelayQueryUseCase>) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self {
            socket,
            use_case,
            servfail_on_error: false,
            max_datagram_size: MAX_UDP_MESSAGE_SIZE,
        })
    }

    pub fn with_servfail_on_error(mut self, enabled: bool) -> Self {
        self.servfail_on_error = enabled;
        self
    }

    pub fn with_max_datagram_size(mut self, size: usize) -> Self {
        self.max_datagram_size = size;
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Runs until the listening socket fails.
    pub async fn run(&self) -> io::Result<()> {
        let mut recv_buf = vec![0u8; self.max_datagram_size];

        info!(
            bind_address = %self.local_addr()?,
            servfail_on_error = self.servfail_on_error,
            "DNS relay listening"
        );

        loop {
            let (len, from) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                // ICMP port-unreachable from an earlier reply surfaces here on some platforms
                Err(e) if is_transient(&e) => {
                    warn!(error = %e, "Transient UDP recv error");
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "UDP recv failed, stopping relay");
                    return Err(e);
                }
            };

            self.handle_packet(&recv_buf[..len], from).await;
        }
    }

    async fn handle_packet(&self, packet: &[u8], from: SocketAddr) {
        debug!(client = %from, bytes = packet.len(), "Client packet received");

        let reply = match self.use_case.execute(packet).await {
            Ok(merged) => merged,
            Err(e) => {
                warn!(client = %from, error = %e, "Relay failed for client packet");
                if !self.servfail_on_error {
                    return;
                }
                match build_servfail(packet) {
                    Some(servfail) => servfail,
                    None => return,
                }
            }
        };

        if let Err(e) = self.socket.send_to(&reply, from).await {
            warn!(client = %from, error = %e, "Failed to send reply");
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::Interrupted
    )
}
