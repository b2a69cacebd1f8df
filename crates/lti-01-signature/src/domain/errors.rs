//! # Signature Errors
//!
//! Error types for signature computation. Signature *mismatch* is not an
//! error; it is a `false` from verification.

use thiserror::Error;

/// Errors that prevent a signature from being computed at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Trust-proxy mode is on but there is nothing to take the host from.
    #[error(
        "trust proxy is enabled, so either an x-forwarded-host header or a configured app host is required"
    )]
    ProxyHostUnavailable,

    /// The configured application host carries a scheme.
    #[error(
        "app host should not contain the protocol string, only the domain and path of the proxied app: {0}"
    )]
    AppHostHasProtocol(String),

    /// The request carries no `Host` header.
    #[error("request has no host header")]
    MissingHost,
}

impl SignatureError {
    /// True for errors caused by provider configuration rather than by the
    /// request being signed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SignatureError::ProxyHostUnavailable | SignatureError::AppHostHasProtocol(_)
        )
    }
}
