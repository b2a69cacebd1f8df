//! Domain layer for outcome reporting.

pub mod authorization;
pub mod document;
pub mod errors;
pub mod response;
