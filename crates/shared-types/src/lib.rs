//! # Shared Types Crate
//!
//! This crate contains the entities shared by the signature engine, the nonce
//! store, the launch validator and the outcome reporting client.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types are defined here.
//! - **Secrets stay secret**: `Credentials` never prints its consumer secret and
//!   wipes it on drop.
//! - **No collapsing**: `Parameters` keeps every value of a repeated key, in
//!   arrival order. Canonicalization depends on it.
//! - **Injected time**: everything that needs "now" takes a `Clock`.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod request;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::*;
pub use errors::*;
pub use request::InboundRequest;
