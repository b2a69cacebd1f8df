//! # Outcome Reporting (LTI-04)
//!
//! Sends scores back to the tool consumer that launched the tool.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): outcome XML documents, response parsing,
//!   and the signed `Authorization` header (OAuth body hash)
//! - **Ports Layer** (`ports/`): `OutcomeTransport`, the HTTP seam
//! - **Adapters Layer** (`adapters/`): `ReqwestTransport`
//! - **Service Layer** (`service.rs`): `OutcomeService`
//!
//! Every document is validated before any network call. Requests are sent
//! once with a timeout; failures are reported, never retried.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::http::ReqwestTransport;
pub use domain::authorization::{authorization_header, body_hash, signing_base_url};
pub use domain::document::{OutcomeDocument, ResultData, ResultOperation, OUTCOME_NAMESPACE};
pub use domain::errors::OutcomeError;
pub use domain::response::{parse_response, OutcomeResponse};
pub use ports::outbound::{OutcomeRequest, OutcomeTransport};
pub use service::OutcomeService;
