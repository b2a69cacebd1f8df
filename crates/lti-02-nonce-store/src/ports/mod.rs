//! Ports layer: the store contract and the cache it may delegate to.

pub mod inbound;
pub mod outbound;
