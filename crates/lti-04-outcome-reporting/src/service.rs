//! # Outcome Service
//!
//! Reports results for one launch (one `lis_result_sourcedid`).
//!
//! Each call builds and validates a document, signs it, posts it once through
//! the `OutcomeTransport` and checks the response envelope.

use std::sync::Arc;
use std::time::Duration;

use lti_01_signature::{HmacSha1Signer, RequestSigner};
use shared_types::{Clock, Credentials, OutcomeServiceConfig, SystemClock};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::domain::authorization::authorization_header;
use crate::domain::document::{OutcomeDocument, ResultData};
use crate::domain::errors::OutcomeError;
use crate::domain::response::{parse_response, OutcomeResponse};
use crate::ports::outbound::{OutcomeRequest, OutcomeTransport};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_LANGUAGE: &str = "en";

/// Outcome reporting client for a single result record.
pub struct OutcomeService<T: OutcomeTransport, G: RequestSigner = HmacSha1Signer> {
    credentials: Credentials,
    /// Kept as configured; the signature covers this exact text.
    service_url: String,
    source_did: String,
    result_data_types: Vec<String>,
    language: String,
    timeout: Duration,
    transport: T,
    signer: G,
    clock: Arc<dyn Clock>,
}

impl<T: OutcomeTransport> OutcomeService<T> {
    /// Creates a client for the endpoint a launch advertised.
    ///
    /// # Errors
    /// `Configuration` when the service URL is not an absolute http(s) URL.
    pub fn new(
        credentials: Credentials,
        config: &OutcomeServiceConfig,
        transport: T,
    ) -> Result<Self, OutcomeError> {
        let parsed = Url::parse(&config.service_url)
            .map_err(|e| OutcomeError::Configuration(format!("invalid service url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(OutcomeError::Configuration(format!(
                "service url must be http(s): {}",
                config.service_url
            )));
        }

        Ok(Self {
            credentials,
            service_url: config.service_url.clone(),
            source_did: config.source_did.clone(),
            result_data_types: config.result_data_types.clone(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport,
            signer: HmacSha1Signer::default(),
            clock: Arc::new(SystemClock),
        })
    }
}

impl<T: OutcomeTransport, G: RequestSigner> OutcomeService<T, G> {
    /// Replaces the signer.
    pub fn with_signer<H: RequestSigner>(self, signer: H) -> OutcomeService<T, H> {
        OutcomeService {
            credentials: self.credentials,
            service_url: self.service_url,
            source_did: self.source_did,
            result_data_types: self.result_data_types,
            language: self.language,
            timeout: self.timeout,
            transport: self.transport,
            signer,
            clock: self.clock,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn source_did(&self) -> &str {
        &self.source_did
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether the consumer accepts result data of `kind`.
    ///
    /// With `None`, whether it accepts any result data at all.
    pub fn supports_result_data(&self, kind: Option<&str>) -> bool {
        !self.result_data_types.is_empty()
            && kind.map_or(true, |kind| self.result_data_types.iter().any(|t| t == kind))
    }

    // =========================================================================
    // Result calls
    // =========================================================================

    /// Replaces the stored score.
    pub async fn send_replace_result(&self, score: f64) -> Result<(), OutcomeError> {
        self.replace(score, None).await
    }

    /// Replaces the score and attaches a text payload.
    pub async fn send_replace_result_with_text(
        &self,
        score: f64,
        text: impl Into<String>,
    ) -> Result<(), OutcomeError> {
        self.replace(score, Some(ResultData::Text(text.into()))).await
    }

    /// Replaces the score and attaches a URL payload.
    pub async fn send_replace_result_with_url(
        &self,
        score: f64,
        url: impl Into<String>,
    ) -> Result<(), OutcomeError> {
        self.replace(score, Some(ResultData::Url(url.into()))).await
    }

    /// Reads the stored score.
    pub async fn send_read_result(&self) -> Result<f64, OutcomeError> {
        let doc = self.document(OutcomeDocument::read(self.source_did.as_str()));
        self.send(&doc).await?.read_score()
    }

    /// Deletes the stored result.
    pub async fn send_delete_result(&self) -> Result<(), OutcomeError> {
        let doc = self.document(OutcomeDocument::delete(self.source_did.as_str()));
        self.send(&doc).await.map(|_| ())
    }

    fn document(&self, doc: OutcomeDocument) -> OutcomeDocument {
        doc.with_language(self.language.as_str())
            .with_result_data_types(self.result_data_types.clone())
    }

    async fn replace(&self, score: f64, payload: Option<ResultData>) -> Result<(), OutcomeError> {
        let mut doc = self.document(OutcomeDocument::replace(self.source_did.as_str()));
        doc.add_score(score)?;
        if let Some(payload) = payload {
            doc.add_payload(payload)?;
        }
        self.send(&doc).await.map(|_| ())
    }

    async fn send(&self, doc: &OutcomeDocument) -> Result<OutcomeResponse, OutcomeError> {
        let message_id = Uuid::new_v4().to_string();
        let body = doc.to_xml(&message_id)?;
        let authorization = authorization_header(
            &self.signer,
            &self.credentials,
            &self.service_url,
            &body,
            &Uuid::new_v4().to_string(),
            self.clock.now_secs(),
        );

        debug!(
            operation = ?doc.operation(),
            message_id = %message_id,
            url = %self.service_url,
            "Sending outcome request"
        );

        let raw = self
            .transport
            .post(OutcomeRequest {
                url: self.service_url.clone(),
                authorization,
                body,
                timeout: self.timeout,
            })
            .await?;

        parse_response(&raw)?.into_result().map_err(|err| {
            warn!(operation = ?doc.operation(), error = %err, "Outcome request rejected");
            err
        })
    }
}
