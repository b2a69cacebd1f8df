//! # HMAC-SHA1 Signer
//!
//! Application service that implements `RequestSigner`.
//!
//! ## Inbound signing
//!
//! 1. Resolve protocol and host through the `OriginPolicy`.
//! 2. `base_url = protocol://host + path` (query string stripped).
//! 3. Parse the query string into its own parameter map, unless the consumer
//!    is a vendor known to sign without it.
//! 4. Build the canonical base string and HMAC it.

use shared_types::{InboundRequest, Parameters};
use tracing::debug;

use crate::domain::canonical::SignatureRequest;
use crate::domain::errors::SignatureError;
use crate::domain::hmac_sha1::{sign_string, SIGNATURE_METHOD};
use crate::domain::origin::OriginPolicy;
use crate::ports::inbound::RequestSigner;

/// Body key that identifies the consumer product.
pub const PRODUCT_FAMILY_PARAM: &str = "tool_consumer_info_product_family_code";

/// Consumers that leave the URL query out of the signature.
const QUERY_UNSIGNED_VENDORS: &[&str] = &["canvas", "schoology"];

/// HMAC-SHA1 implementation of [`RequestSigner`].
#[derive(Debug, Clone, Default)]
pub struct HmacSha1Signer {
    origin: OriginPolicy,
}

impl HmacSha1Signer {
    /// Creates a signer with the given origin policy.
    pub fn new(origin: OriginPolicy) -> Self {
        Self { origin }
    }

    /// The origin policy in use.
    pub fn origin(&self) -> &OriginPolicy {
        &self.origin
    }

    /// Whether the consumer signs without the URL query.
    fn signs_without_query(body: &Parameters) -> bool {
        body.get_str(PRODUCT_FAMILY_PARAM)
            .is_some_and(|vendor| QUERY_UNSIGNED_VENDORS.contains(&vendor))
    }
}

impl RequestSigner for HmacSha1Signer {
    fn name(&self) -> &'static str {
        SIGNATURE_METHOD
    }

    fn build_signature_raw(
        &self,
        request: &SignatureRequest<'_>,
        consumer_secret: &str,
        token: Option<&str>,
    ) -> String {
        sign_string(&request.base_string(), consumer_secret, token)
    }

    fn build_signature(
        &self,
        request: &InboundRequest,
        body: &Parameters,
        consumer_secret: &str,
        token: Option<&str>,
    ) -> Result<String, SignatureError> {
        let protocol = self.origin.protocol(request);
        let host = self.origin.host(request)?;
        let base_url = format!("{}://{}{}", protocol, host, request.path());

        let query = match request.query() {
            Some(raw) if !Self::signs_without_query(body) => Parameters::from_urlencoded(raw),
            _ => Parameters::new(),
        };

        debug!(
            method = %request.method,
            base_url = %base_url,
            query_params = query.len(),
            "Signing inbound request"
        );

        let canonical = SignatureRequest::new(&request.method, &base_url, body, &query);
        Ok(self.build_signature_raw(&canonical, consumer_secret, token))
    }
}
