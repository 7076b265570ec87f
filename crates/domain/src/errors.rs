use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Short buffer: needed {needed} bytes, {available} available")]
    ShortBuffer { needed: usize, available: usize },

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Label too long: {0} bytes (max 63)")]
    LabelTooLong(usize),

    #[error("Name too long: {0} bytes (max 255)")]
    NameTooLong(usize),

    #[error("Query carries no questions")]
    NoQuestions,

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Upstream timeout waiting for {server}")]
    UpstreamTimeout { server: String },

    #[error("Upstream {server} unreachable: {reason}")]
    UpstreamUnreachable { server: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    /// True for failures talking to the resolver, as opposed to codec failures.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            Self::UpstreamTimeout { .. } | Self::UpstreamUnreachable { .. }
        )
    }
}
