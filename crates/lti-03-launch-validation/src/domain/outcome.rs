use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a launch was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InvalidKind {
    /// Version or message type unacceptable.
    MalformedParameters,
    /// Signature missing or mismatched.
    BadSignature,
    /// Nonce expired, reused or unusable.
    StaleOrReusedNonce,
}

impl fmt::Display for InvalidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvalidKind::MalformedParameters => "malformed_parameters",
            InvalidKind::BadSignature => "bad_signature",
            InvalidKind::StaleOrReusedNonce => "stale_or_reused_nonce",
        };
        f.write_str(name)
    }
}

/// Pass/fail decision for one launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    Valid,
    Invalid { kind: InvalidKind, message: String },
}

impl ValidationOutcome {
    pub fn invalid(kind: InvalidKind, message: impl Into<String>) -> Self {
        ValidationOutcome::Invalid {
            kind,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The rejection kind, if rejected.
    pub fn kind(&self) -> Option<InvalidKind> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { kind, .. } => Some(*kind),
        }
    }
}
