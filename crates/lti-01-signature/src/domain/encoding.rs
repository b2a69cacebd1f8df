//! # Special Encoding
//!
//! Percent-encoding used for every component of the signature base string.
//!
//! Equivalent to `encodeURIComponent` followed by escaping `! ' ( ) *`: only
//! ASCII alphanumerics and `- _ . ~` pass through; every other byte of the
//! UTF-8 encoding becomes `%XX` with uppercase hex.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped, per RFC 3986 "unreserved".
const SPECIAL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `input` for use in a signature base string.
pub fn special_encode(input: &str) -> String {
    utf8_percent_encode(input, SPECIAL_ENCODE_SET).to_string()
}
