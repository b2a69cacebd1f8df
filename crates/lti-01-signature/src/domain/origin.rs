//! # Origin Resolution
//!
//! Works out the scheme and host a tool consumer signed against.
//!
//! Behind a reverse proxy the `Host` header and the transport's TLS state
//! describe the proxy hop, not the URL the consumer saw. With trust-proxy
//! enabled the configured app host, then `X-Forwarded-Host`, then `Host` are
//! used, and `X-Forwarded-Proto` overrides the protocol.

use serde::{Deserialize, Serialize};
use shared_types::InboundRequest;

use super::errors::SignatureError;

const FORWARDED_HOST: &str = "x-forwarded-host";
const FORWARDED_PROTO: &str = "x-forwarded-proto";
const HOST: &str = "host";

/// Host and protocol resolution policy.
///
/// Deserialization goes through [`OriginPolicy::new`], so a stored policy is
/// held to the same app host rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOriginPolicy")]
pub struct OriginPolicy {
    trust_proxy: bool,
    app_host: Option<String>,
}

#[derive(Deserialize)]
struct RawOriginPolicy {
    #[serde(default)]
    trust_proxy: bool,
    #[serde(default)]
    app_host: Option<String>,
}

impl TryFrom<RawOriginPolicy> for OriginPolicy {
    type Error = SignatureError;

    fn try_from(raw: RawOriginPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.trust_proxy, raw.app_host)
    }
}

impl OriginPolicy {
    /// Use the request's own `Host` header and transport state.
    pub fn direct() -> Self {
        Self::default()
    }

    /// Creates a policy, rejecting an app host that includes a scheme.
    ///
    /// An empty app host is treated as unset.
    pub fn new(trust_proxy: bool, app_host: Option<String>) -> Result<Self, SignatureError> {
        let app_host = app_host.filter(|host| !host.is_empty());

        if let Some(host) = &app_host {
            if host.contains("http://") || host.contains("https://") {
                return Err(SignatureError::AppHostHasProtocol(host.clone()));
            }
        }

        Ok(Self {
            trust_proxy,
            app_host,
        })
    }

    /// Whether forwarded headers are honoured.
    pub fn trust_proxy(&self) -> bool {
        self.trust_proxy
    }

    /// The configured application host, if any.
    pub fn app_host(&self) -> Option<&str> {
        self.app_host.as_deref()
    }

    /// Resolves the host the request was addressed to.
    pub fn host<'a>(&'a self, request: &'a InboundRequest) -> Result<&'a str, SignatureError> {
        if !self.trust_proxy {
            return request.header(HOST).ok_or(SignatureError::MissingHost);
        }

        let forwarded = request.header(FORWARDED_HOST);
        if self.app_host.is_none() && forwarded.is_none() {
            return Err(SignatureError::ProxyHostUnavailable);
        }

        self.app_host
            .as_deref()
            .or(forwarded)
            .or_else(|| request.header(HOST))
            .ok_or(SignatureError::MissingHost)
    }

    /// Resolves the protocol the request was sent with.
    pub fn protocol<'a>(&self, request: &'a InboundRequest) -> &'a str {
        if self.trust_proxy {
            if let Some(proto) = request.header(FORWARDED_PROTO) {
                return proto;
            }
        }

        if let Some(proto) = request.protocol.as_deref() {
            return proto;
        }

        if request.encrypted {
            "https"
        } else {
            "http"
        }
    }
}
