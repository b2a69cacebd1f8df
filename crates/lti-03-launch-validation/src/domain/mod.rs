//! Domain layer for launch validation.

pub mod context;
pub mod errors;
pub mod outcome;
pub mod parameters;
