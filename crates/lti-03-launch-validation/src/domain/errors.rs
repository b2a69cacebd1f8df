//! # Provider Errors
//!
//! Only misconfiguration is an error. A request that fails validation yields
//! `ValidationOutcome::Invalid` instead.

use lti_01_signature::SignatureError;
use shared_types::CredentialsError;
use thiserror::Error;

/// The provider cannot operate as configured.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Consumer key or secret missing.
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// Host or proxy settings are unusable.
    #[error(transparent)]
    Origin(#[from] SignatureError),

    #[error("nonce window must be greater than zero")]
    ZeroNonceWindow,

    #[error("outcome timeout must be greater than zero")]
    ZeroOutcomeTimeout,
}

/// Errors returned by `Provider::validate`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
