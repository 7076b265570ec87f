use async_trait::async_trait;
use dns_relay_domain::DomainError;

/// One request, one response, bounded by the client's timeout.
///
/// Implementations own their resolver address and must not share sockets
/// between calls, so concurrent calls are independent.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Sends a single-question query datagram and returns the raw reply.
    async fn query(&self, datagram: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Resolver address, for logging.
    fn server(&self) -> String;
}
