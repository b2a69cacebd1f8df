//! # HMAC-SHA1
//!
//! Signs a base string and compares signatures.
//!
//! The signing key is `consumer_secret & token`, both used verbatim; an absent
//! token leaves the trailing `&` in place.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;

/// Value of `oauth_signature_method` for this engine.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Signs `base_string`, returning the base64 digest.
pub fn sign_string(base_string: &str, consumer_secret: &str, token: Option<&str>) -> String {
    let token = token.unwrap_or_default();
    let mut key = String::with_capacity(consumer_secret.len() + 1 + token.len());
    key.push_str(consumer_secret);
    key.push('&');
    key.push_str(token);

    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());

    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Constant-time signature comparison.
///
/// Length differences are not hidden; signature length is public anyway.
pub fn signatures_match(expected: &str, candidate: &str) -> bool {
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
