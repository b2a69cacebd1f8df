//! # Signed Authorization Header
//!
//! OAuth 1.0 header for a POST whose body is not form encoded: the body is
//! covered by `oauth_body_hash` (base64 SHA-1) instead of being signed
//! directly.
//!
//! Fields appear in this order, signature last:
//! `oauth_version`, `oauth_nonce`, `oauth_timestamp`, `oauth_consumer_key`,
//! `oauth_body_hash`, `oauth_signature_method`, `oauth_signature`.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use lti_01_signature::{special_encode, RequestSigner, SignatureRequest, SIGNATURE_PARAM};
use sha1::{Digest, Sha1};
use shared_types::{Credentials, Parameters};

const OAUTH_VERSION: &str = "1.0";

/// Base64 SHA-1 of the request body.
pub fn body_hash(body: &str) -> String {
    BASE64_STANDARD.encode(Sha1::digest(body.as_bytes()))
}

/// The URL the signature covers: the service URL cut at the query or
/// fragment. Scheme and authority are lowercased but the port is kept as
/// written, so an explicit default port stays in the signed string.
pub fn signing_base_url(service_url: &str) -> String {
    let end = service_url.find(['?', '#']).unwrap_or(service_url.len());
    let without_query = &service_url[..end];
    let Some((scheme, rest)) = without_query.split_once("://") else {
        return without_query.to_string();
    };
    let (authority, path) = rest.find('/').map_or((rest, "/"), |i| rest.split_at(i));
    format!("{}://{}{}", scheme.to_ascii_lowercase(), authority.to_ascii_lowercase(), path)
}

fn query_parameters(service_url: &str) -> Parameters {
    let without_fragment = service_url.split('#').next().unwrap_or_default();
    without_fragment
        .split_once('?')
        .map(|(_, query)| Parameters::from_urlencoded(query))
        .unwrap_or_default()
}

/// Builds the `Authorization` header value for a POST of `body`.
///
/// `nonce` and `timestamp` are supplied by the caller; the service uses a
/// UUID v4 and the current time.
pub fn authorization_header<G: RequestSigner + ?Sized>(
    signer: &G,
    credentials: &Credentials,
    service_url: &str,
    body: &str,
    nonce: &str,
    timestamp: u64,
) -> String {
    let mut fields: Vec<(&str, String)> = vec![
        ("oauth_version", OAUTH_VERSION.to_string()),
        ("oauth_nonce", nonce.to_string()),
        ("oauth_timestamp", timestamp.to_string()),
        ("oauth_consumer_key", credentials.consumer_key().to_string()),
        ("oauth_body_hash", body_hash(body)),
        ("oauth_signature_method", signer.name().to_string()),
    ];

    let signed: Parameters = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let query = query_parameters(service_url);
    let base_url = signing_base_url(service_url);

    let signature = signer.build_signature_raw(
        &SignatureRequest::new("POST", &base_url, &signed, &query),
        credentials.consumer_secret(),
        None,
    );
    fields.push((SIGNATURE_PARAM, signature));

    let encoded: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, special_encode(value)))
        .collect();

    format!("OAuth realm=\"\",{}", encoded.join(","))
}
