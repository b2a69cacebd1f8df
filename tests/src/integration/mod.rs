//! Cross-crate integration flows.

pub mod fixtures;

mod backends;
mod launch_flow;
mod logging;
mod origins;
mod replay;
