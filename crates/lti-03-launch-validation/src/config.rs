//! # Provider Configuration
//!
//! Loaded from defaults or environment, then validated.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `LTI_TRUST_PROXY` | `trust_proxy` | `false` |
//! | `LTI_APP_HOST` | `app_host` | unset |
//! | `LTI_RESULT_DATA_TYPES` | `result_data_types` (comma separated) | empty |
//! | `LTI_NONCE_WINDOW_SECS` | `nonce_window_secs` | `300` |
//! | `LTI_OUTCOME_TIMEOUT_MS` | `outcome_timeout` | `10000` |

use std::env;
use std::time::Duration;

use lti_01_signature::OriginPolicy;
use lti_02_nonce_store::DEFAULT_WINDOW_SECS;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigurationError;

/// Default timeout for outbound outcome requests.
pub const DEFAULT_OUTCOME_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Honour `X-Forwarded-Host` / `X-Forwarded-Proto`.
    pub trust_proxy: bool,
    /// Public host (and optional path prefix) of the tool, without scheme.
    pub app_host: Option<String>,
    /// Result data kinds assumed when a launch does not list any.
    pub result_data_types: Vec<String>,
    /// Nonce validity window.
    pub nonce_window_secs: u64,
    /// Timeout for each outbound outcome request.
    pub outcome_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            trust_proxy: false,
            app_host: None,
            result_data_types: Vec::new(),
            nonce_window_secs: DEFAULT_WINDOW_SECS,
            outcome_timeout: DEFAULT_OUTCOME_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    /// Create configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; call `validate` on the
    /// result.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            trust_proxy: lookup("LTI_TRUST_PROXY")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.trust_proxy),

            app_host: lookup("LTI_APP_HOST").filter(|v| !v.is_empty()),

            result_data_types: lookup("LTI_RESULT_DATA_TYPES")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or(defaults.result_data_types),

            nonce_window_secs: lookup("LTI_NONCE_WINDOW_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.nonce_window_secs),

            outcome_timeout: lookup("LTI_OUTCOME_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.outcome_timeout),
        }
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.nonce_window_secs == 0 {
            return Err(ConfigurationError::ZeroNonceWindow);
        }
        if self.outcome_timeout.is_zero() {
            return Err(ConfigurationError::ZeroOutcomeTimeout);
        }
        self.origin_policy()?;
        Ok(())
    }

    /// Origin policy for the HMAC signer.
    pub fn origin_policy(&self) -> Result<OriginPolicy, ConfigurationError> {
        Ok(OriginPolicy::new(self.trust_proxy, self.app_host.clone())?)
    }
}
