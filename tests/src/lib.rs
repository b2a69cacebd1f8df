//! # LTI Provider Test Suite
//!
//! Cross-crate flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs      # Signed launch builders, recording transport
//!     ├── launch_flow.rs   # Launch -> context -> outcome report
//!     ├── replay.rs        # Concurrent replay of one signed launch
//!     ├── backends.rs      # In-process vs shared-cache nonce verdicts
//!     ├── logging.rs       # Launches under an installed subscriber
//!     └── origins.rs       # Proxy and vendor URL reconstruction
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lti-tests
//! cargo test -p lti-tests integration::replay
//! ```

pub mod integration;
