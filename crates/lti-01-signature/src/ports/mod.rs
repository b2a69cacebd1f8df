//! Ports layer for the signature engine.

pub mod inbound;
