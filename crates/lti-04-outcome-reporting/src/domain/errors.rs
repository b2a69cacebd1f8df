use thiserror::Error;

/// Errors from outcome reporting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutcomeError {
    /// A document value is out of range (e.g. score outside 0..=1).
    #[error("{0}")]
    Parameter(String),

    /// Result data payload rejected.
    #[error("{0}")]
    Extension(String),

    /// The request could not be delivered.
    #[error("outcome request failed: {0}")]
    Transport(String),

    /// The consumer answered, but not with success.
    #[error("{0}")]
    ProtocolResponse(String),

    #[error("outcome service misconfigured: {0}")]
    Configuration(String),
}
