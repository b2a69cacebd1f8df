//! Domain layer for the nonce store.

pub mod entities;
pub mod errors;
