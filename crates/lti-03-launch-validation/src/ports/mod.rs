//! Ports layer.
//!
//! Outbound dependencies (`RequestSigner`, `NonceStore`) are the ports of the
//! signature and nonce-store crates.

pub mod inbound;
