//! Upstream transports. Only plain UDP: truncated replies are passed through
//! as received, there is no TCP retry.
pub mod udp;
