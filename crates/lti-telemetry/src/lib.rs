//! # LTI Telemetry
//!
//! Structured logging for the LTI provider crates.
//!
//! The library crates only emit `tracing` events and never install a
//! subscriber themselves. This crate is for host applications (the web server
//! that receives launches): call [`init_logging`] once at startup. No library
//! crate in the workspace depends on it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lti_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `lti-provider` | Service name attached to the startup event |
//! | `LTI_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directives |
//! | `LTI_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `LTI_JSON_LOGS` | `false` (`true` in containers) | JSON instead of pretty output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(String),
}
