#![allow(dead_code)]
mod mock_upstream;
mod packets;

pub use mock_upstream::MockUpstreamClient;
pub use packets::*;
