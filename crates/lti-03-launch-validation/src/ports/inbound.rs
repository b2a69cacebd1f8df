//! # Inbound Ports (Driving Ports / API)

use async_trait::async_trait;
use shared_types::{InboundRequest, Parameters};

use crate::domain::context::LaunchContext;
use crate::domain::errors::ProviderError;
use crate::domain::outcome::ValidationOutcome;

/// Launch validation API exposed to server adapters.
///
/// `body` overrides `request.body` when the framework decoded the form
/// elsewhere.
#[async_trait]
pub trait LaunchValidationApi: Send + Sync {
    /// Runs the full validation pipeline. Consumes the nonce on success.
    ///
    /// # Errors
    /// Only for provider misconfiguration, e.g. trust-proxy enabled with no
    /// host source.
    async fn validate(
        &self,
        request: &InboundRequest,
        body: Option<&Parameters>,
    ) -> Result<ValidationOutcome, ProviderError>;

    /// Builds the launch context. Call after a `Valid` outcome.
    fn parse_request(&self, request: &InboundRequest, body: Option<&Parameters>) -> LaunchContext;
}
