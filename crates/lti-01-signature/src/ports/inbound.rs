//! # Inbound Ports (Driving Ports / API)
//!
//! The signer abstraction consumed by launch validation and outcome reporting.

use shared_types::{InboundRequest, Parameters};

use crate::domain::canonical::SignatureRequest;
use crate::domain::errors::SignatureError;
use crate::domain::hmac_sha1::signatures_match;

/// A request signing scheme.
///
/// Implementations must be thread-safe (`Send + Sync`); one signer is shared
/// by every concurrent validation.
pub trait RequestSigner: Send + Sync {
    /// Value advertised in `oauth_signature_method`.
    fn name(&self) -> &'static str;

    // =========================================================================
    // Signing
    // =========================================================================

    /// Signs an already canonical request (outbound use).
    fn build_signature_raw(
        &self,
        request: &SignatureRequest<'_>,
        consumer_secret: &str,
        token: Option<&str>,
    ) -> String;

    /// Signs an inbound request, resolving its public URL first.
    ///
    /// `body` is passed separately so callers can sign a filtered or
    /// substituted body without cloning the request.
    ///
    /// # Errors
    /// Fails when the origin (host) of the request cannot be resolved.
    fn build_signature(
        &self,
        request: &InboundRequest,
        body: &Parameters,
        consumer_secret: &str,
        token: Option<&str>,
    ) -> Result<String, SignatureError>;

    // =========================================================================
    // Verification
    // =========================================================================

    /// Recomputes the signature of `request` and compares it to `candidate`.
    fn verify(
        &self,
        request: &InboundRequest,
        body: &Parameters,
        consumer_secret: &str,
        token: Option<&str>,
        candidate: &str,
    ) -> Result<bool, SignatureError> {
        let expected = self.build_signature(request, body, consumer_secret, token)?;
        Ok(signatures_match(&expected, candidate))
    }

    /// Verifies an already canonical request.
    fn verify_raw(
        &self,
        request: &SignatureRequest<'_>,
        consumer_secret: &str,
        token: Option<&str>,
        candidate: &str,
    ) -> bool {
        let expected = self.build_signature_raw(request, consumer_secret, token);
        signatures_match(&expected, candidate)
    }
}
