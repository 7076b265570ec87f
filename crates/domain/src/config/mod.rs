pub mod errors;
pub mod logging;
pub mod relay;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use relay::{AnswerNames, FanOut, RelayConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
