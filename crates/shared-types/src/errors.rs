//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised while constructing `Credentials`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    /// The consumer key was empty.
    #[error("Must specify consumer_key")]
    MissingConsumerKey,

    /// The consumer secret was empty.
    #[error("Must specify consumer_secret")]
    MissingConsumerSecret,
}
