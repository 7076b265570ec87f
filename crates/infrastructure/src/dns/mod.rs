pub mod server;
pub mod transport;

pub use server::RelayServer;
pub use transport::udp::UdpUpstreamClient;
