//! DNS Relay Domain Layer
pub mod config;
pub mod errors;
pub mod forwarded_query;
pub mod wire;

pub use config::{AnswerNames, CliOverrides, Config, ConfigError, FanOut};
pub use errors::DomainError;
pub use forwarded_query::ForwardedQuery;
pub use wire::{Header, Question, RecordSpan};
