//! # Canonical Base String
//!
//! Builds the exact string that is HMAC'd to produce a signature.
//!
//! ## Algorithm
//!
//! 1. Take every body and query parameter except `oauth_signature`.
//! 2. Emit one `key=special_encode(value)` pair per value (lists are expanded,
//!    never collapsed). Keys are emitted verbatim.
//! 3. Sort the pairs byte-wise as whole strings, join with `&`, and encode the
//!    joined string again.
//! 4. `UPPER(method) & special_encode(base_url) & <step 3>`.

use shared_types::Parameters;

use super::encoding::special_encode;

/// The parameter that carries the signature. It never signs itself.
pub const SIGNATURE_PARAM: &str = "oauth_signature";

/// The logical unit that is signed or verified.
///
/// Body and query parameters are kept apart: when the same key appears in
/// both, both occurrences are signed.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRequest<'a> {
    /// HTTP method; upper-cased when canonicalized.
    pub method: &'a str,
    /// Scheme, host and path. No query string.
    pub base_url: &'a str,
    /// Form body parameters.
    pub body: &'a Parameters,
    /// Query string parameters.
    pub query: &'a Parameters,
}

impl<'a> SignatureRequest<'a> {
    /// Creates a request to sign.
    pub fn new(
        method: &'a str,
        base_url: &'a str,
        body: &'a Parameters,
        query: &'a Parameters,
    ) -> Self {
        Self {
            method,
            base_url,
            body,
            query,
        }
    }

    /// The canonical base string for this request.
    pub fn base_string(&self) -> String {
        base_string(self)
    }
}

/// Builds the canonical signature base string.
pub fn base_string(request: &SignatureRequest<'_>) -> String {
    format!(
        "{}&{}&{}",
        request.method.to_uppercase(),
        special_encode(request.base_url),
        normalized_parameters(request.body, request.query)
    )
}

/// Sorted, joined and re-encoded parameter string (third base string component).
pub fn normalized_parameters(body: &Parameters, query: &Parameters) -> String {
    let mut pairs = Vec::with_capacity(body.len() + query.len());
    collect_pairs(body, &mut pairs);
    collect_pairs(query, &mut pairs);

    // String ordering is byte-wise, which is the contract.
    pairs.sort_unstable();

    special_encode(&pairs.join("&"))
}

fn collect_pairs(params: &Parameters, out: &mut Vec<String>) {
    for (key, value) in params {
        if key == SIGNATURE_PARAM {
            continue;
        }
        for item in value.as_slice() {
            out.push(format!("{}={}", key, special_encode(item)));
        }
    }
}
