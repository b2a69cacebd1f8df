//! Domain layer for the signature engine.

pub mod canonical;
pub mod encoding;
pub mod errors;
pub mod hmac_sha1;
pub mod origin;
