//! # Launch Validation (LTI-03)
//!
//! Decides whether an inbound launch is authentic.
//!
//! ## Pipeline
//!
//! Short-circuits at the first failure:
//!
//! 1. **Parameter shape**: version and message type. Nothing cryptographic is
//!    touched for a malformed request.
//! 2. **Signature**: recomputed with the configured `RequestSigner` and
//!    compared to `oauth_signature`.
//! 3. **Nonce**: `oauth_nonce` / `oauth_timestamp` are consumed from the
//!    `NonceStore`. This is the only state a successful validation changes.
//!
//! Rejections are values (`ValidationOutcome::Invalid`); `Err` is reserved for
//! provider misconfiguration.

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::ProviderConfig;
pub use domain::context::LaunchContext;
pub use domain::errors::{ConfigurationError, ProviderError};
pub use domain::outcome::{InvalidKind, ValidationOutcome};
pub use domain::parameters::{
    validate_parameters, MessageType, BASIC_LAUNCH_REQUEST, CONTENT_ITEM_SELECTION_REQUEST,
    LTI_VERSION,
};
pub use ports::inbound::LaunchValidationApi;
pub use service::Provider;
