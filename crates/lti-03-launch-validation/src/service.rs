//! # Provider Service
//!
//! Application service that implements `LaunchValidationApi`.
//!
//! A `Provider` is built once per consumer key and shared by every request
//! (`Arc<Provider>`); the only mutable state it touches is its nonce store.

use async_trait::async_trait;
use lti_01_signature::{HmacSha1Signer, RequestSigner, SIGNATURE_PARAM};
use lti_02_nonce_store::{MemoryNonceStore, NonceStore, NonceVerdict};
use shared_types::{Credentials, InboundRequest, Parameters};
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::domain::context::LaunchContext;
use crate::domain::errors::{ConfigurationError, ProviderError};
use crate::domain::outcome::{InvalidKind, ValidationOutcome};
use crate::domain::parameters::validate_parameters;
use crate::ports::inbound::LaunchValidationApi;

const NONCE_PARAM: &str = "oauth_nonce";
const TIMESTAMP_PARAM: &str = "oauth_timestamp";

/// Launch validator for one set of consumer credentials.
pub struct Provider<S: NonceStore = MemoryNonceStore, G: RequestSigner = HmacSha1Signer> {
    credentials: Credentials,
    nonce_store: S,
    signer: G,
    config: ProviderConfig,
}

impl Provider {
    /// Provider with an in-process nonce store, HMAC-SHA1 and default config.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            nonce_store: MemoryNonceStore::new(),
            signer: HmacSha1Signer::default(),
            config: ProviderConfig::default(),
        }
    }

    /// Provider built from validated configuration.
    ///
    /// The in-process nonce store uses `config.nonce_window_secs`.
    pub fn from_config(
        credentials: Credentials,
        config: ProviderConfig,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            credentials,
            nonce_store: MemoryNonceStore::new().with_window(config.nonce_window_secs),
            signer: HmacSha1Signer::new(config.origin_policy()?),
            config,
        })
    }
}

impl<S: NonceStore> Provider<S, HmacSha1Signer> {
    /// Applies configuration, rebuilding the signer's origin policy.
    ///
    /// A nonce store passed to `with_nonce_store` keeps its own window.
    pub fn with_config(mut self, config: ProviderConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        self.signer = HmacSha1Signer::new(config.origin_policy()?);
        self.config = config;
        Ok(self)
    }
}

impl<S: NonceStore, G: RequestSigner> Provider<S, G> {
    /// Replaces the nonce store.
    pub fn with_nonce_store<T: NonceStore>(self, nonce_store: T) -> Provider<T, G> {
        Provider {
            credentials: self.credentials,
            nonce_store,
            signer: self.signer,
            config: self.config,
        }
    }

    /// Replaces the signer.
    pub fn with_signer<H: RequestSigner>(self, signer: H) -> Provider<S, H> {
        Provider {
            credentials: self.credentials,
            nonce_store: self.nonce_store,
            signer,
            config: self.config,
        }
    }

    pub fn consumer_key(&self) -> &str {
        self.credentials.consumer_key()
    }

    /// Credentials, e.g. for an outcome service created from a launch.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn signer(&self) -> &G {
        &self.signer
    }

    pub fn nonce_store(&self) -> &S {
        &self.nonce_store
    }

    fn reject(&self, kind: InvalidKind, message: &str, detail: &str) -> ValidationOutcome {
        warn!(
            consumer_key = %self.credentials.consumer_key(),
            kind = %kind,
            detail = %detail,
            "Launch rejected"
        );
        ValidationOutcome::invalid(kind, message)
    }

    fn check_signature(
        &self,
        request: &InboundRequest,
        body: &Parameters,
    ) -> Result<Option<ValidationOutcome>, ProviderError> {
        let Some(candidate) = body.get_str(SIGNATURE_PARAM) else {
            return Ok(Some(self.reject(
                InvalidKind::BadSignature,
                "Invalid Signature",
                "missing oauth_signature",
            )));
        };

        let verified = self.signer.verify(
            request,
            body,
            self.credentials.consumer_secret(),
            None,
            candidate,
        );

        match verified {
            Ok(true) => Ok(None),
            Ok(false) => Ok(Some(self.reject(
                InvalidKind::BadSignature,
                "Invalid Signature",
                "signature mismatch",
            ))),
            Err(err) if err.is_configuration() => {
                Err(ProviderError::Configuration(ConfigurationError::Origin(err)))
            }
            Err(err) => Ok(Some(self.reject(
                InvalidKind::BadSignature,
                "Invalid Signature",
                &err.to_string(),
            ))),
        }
    }
}

#[async_trait]
impl<S: NonceStore, G: RequestSigner> LaunchValidationApi for Provider<S, G> {
    async fn validate(
        &self,
        request: &InboundRequest,
        body: Option<&Parameters>,
    ) -> Result<ValidationOutcome, ProviderError> {
        let body = body.unwrap_or(&request.body);

        if let Err(detail) = validate_parameters(body) {
            return Ok(self.reject(
                InvalidKind::MalformedParameters,
                "Invalid LTI parameters",
                &detail,
            ));
        }

        if let Some(rejection) = self.check_signature(request, body)? {
            return Ok(rejection);
        }

        let nonce = body.get_str(NONCE_PARAM).unwrap_or_default();
        let timestamp = body.get_str(TIMESTAMP_PARAM).unwrap_or_default();

        match self.nonce_store.is_new(nonce, timestamp).await {
            Ok(NonceVerdict::Accepted) => {
                debug!(
                    consumer_key = %self.credentials.consumer_key(),
                    nonce = %nonce,
                    "Launch validated"
                );
                Ok(ValidationOutcome::Valid)
            }
            Ok(verdict) => Ok(self.reject(
                InvalidKind::StaleOrReusedNonce,
                "Expired nonce",
                &format!("{verdict:?}"),
            )),
            Err(err) => Ok(self.reject(
                InvalidKind::StaleOrReusedNonce,
                "Expired nonce",
                &err.to_string(),
            )),
        }
    }

    fn parse_request(&self, request: &InboundRequest, body: Option<&Parameters>) -> LaunchContext {
        let body = body.unwrap_or(&request.body);
        LaunchContext::from_body(body, &self.config.result_data_types)
    }
}
