//! # Signature Engine (LTI-01)
//!
//! OAuth 1.0 style HMAC-SHA1 signing shared by inbound launch verification and
//! outbound outcome requests.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure canonicalization and HMAC logic, no I/O
//! - **Ports Layer** (`ports/`): The `RequestSigner` trait other crates depend on
//! - **Service Layer** (`service.rs`): `HmacSha1Signer`, which resolves the
//!   public origin of an inbound request and signs it
//!
//! ## Interoperability Notes
//!
//! - Values are percent-encoded twice (once per value, once for the joined
//!   parameter string) and `! ' ( ) *` are always escaped. Tool consumers sign
//!   this way, so it must be reproduced byte for byte.
//! - `oauth_signature` is never part of its own base string.
//! - Signature comparison is constant-time.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::canonical::{base_string, normalized_parameters, SignatureRequest, SIGNATURE_PARAM};
pub use domain::encoding::special_encode;
pub use domain::errors::SignatureError;
pub use domain::hmac_sha1::{sign_string, signatures_match, SIGNATURE_METHOD};
pub use domain::origin::OriginPolicy;
pub use ports::inbound::RequestSigner;
pub use service::{HmacSha1Signer, PRODUCT_FAMILY_PARAM};
