//! # HTTP Transport
//!
//! `OutcomeTransport` over reqwest with rustls. No retries.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Certificate, Client};
use tracing::debug;

use crate::domain::errors::OutcomeError;
use crate::ports::outbound::{OutcomeRequest, OutcomeTransport};

const XML_CONTENT_TYPE: &str = "application/xml";

fn transport_error(err: reqwest::Error) -> OutcomeError {
    OutcomeError::Transport(err.to_string())
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Transport trusting the default root store.
    pub fn new() -> Result<Self, OutcomeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| OutcomeError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Transport that additionally trusts a PEM-encoded certificate authority.
    pub fn with_cert_authority(pem: &[u8]) -> Result<Self, OutcomeError> {
        let cert =
            Certificate::from_pem(pem).map_err(|e| OutcomeError::Configuration(e.to_string()))?;
        let client = Client::builder()
            .add_root_certificate(cert)
            .build()
            .map_err(|e| OutcomeError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OutcomeTransport for ReqwestTransport {
    async fn post(&self, request: OutcomeRequest) -> Result<String, OutcomeError> {
        let response = self
            .client
            .post(&request.url)
            .header(AUTHORIZATION, request.authorization)
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .body(request.body)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        debug!(status = %response.status(), url = %request.url, "Outcome response received");
        response.text().await.map_err(transport_error)
    }
}
