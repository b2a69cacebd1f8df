//! # Outbound Ports (Driven Ports / SPI)

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::OutcomeError;

/// A signed outcome POST, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRequest {
    /// Full service URL, query included.
    pub url: String,
    /// `Authorization` header value.
    pub authorization: String,
    /// XML body (`application/xml`).
    pub body: String,
    pub timeout: Duration,
}

/// HTTP seam for outcome requests.
///
/// Implementations send exactly once and return the response body whatever
/// the status code; the envelope carries the outcome.
#[async_trait]
pub trait OutcomeTransport: Send + Sync {
    async fn post(&self, request: OutcomeRequest) -> Result<String, OutcomeError>;
}
