//! Builders shared by the integration flows.

use async_trait::async_trait;
use lti_01_signature::{HmacSha1Signer, RequestSigner, SIGNATURE_PARAM};
use lti_04_outcome_reporting::{OutcomeError, OutcomeRequest, OutcomeTransport};
use parking_lot::Mutex;
use shared_types::{Credentials, InboundRequest, Parameters};

pub const CONSUMER_KEY: &str = "consumer-key";
pub const CONSUMER_SECRET: &str = "consumer-secret";

pub fn credentials() -> Credentials {
    Credentials::new(CONSUMER_KEY, CONSUMER_SECRET).expect("non-empty credentials")
}

/// Unsigned basic launch body with a fresh nonce.
pub fn launch_body(timestamp: u64) -> Parameters {
    Parameters::new()
        .with("lti_message_type", "basic-lti-launch-request")
        .with("lti_version", "LTI-1p0")
        .with("resource_link_id", "rl-42")
        .with("user_id", "u-7")
        .with("lis_person_name_given", "Ada")
        .with("context_id", "course-1")
        .with("oauth_consumer_key", CONSUMER_KEY)
        .with("oauth_signature_method", "HMAC-SHA1")
        .with("oauth_version", "1.0")
        .with("oauth_timestamp", timestamp.to_string())
        .with("oauth_nonce", uuid::Uuid::new_v4().to_string())
}

/// Signs `body` as the consumer would for `request` and attaches it.
pub fn sign_for(request: InboundRequest, body: Parameters, secret: &str) -> InboundRequest {
    sign_with(&HmacSha1Signer::default(), request, body, secret)
}

/// Signs with an explicit signer (for proxied views of a request).
pub fn sign_with<G: RequestSigner>(
    signer: &G,
    request: InboundRequest,
    body: Parameters,
    secret: &str,
) -> InboundRequest {
    let signature = signer
        .build_signature(&request, &body, secret, None)
        .expect("consumer view has a host");
    request.with_body(body.with(SIGNATURE_PARAM, signature))
}

/// Direct launch to `https://tool.example.edu/launch`.
pub fn direct_launch(timestamp: u64) -> InboundRequest {
    let request = InboundRequest::new("POST", "/launch")
        .with_header("Host", "tool.example.edu")
        .with_encrypted(true);
    sign_for(request, launch_body(timestamp), CONSUMER_SECRET)
}

/// Outcome transport that records requests and answers with a fixed body.
pub struct RecordingTransport {
    reply: String,
    requests: Mutex<Vec<OutcomeRequest>>,
}

impl RecordingTransport {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<OutcomeRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl OutcomeTransport for RecordingTransport {
    async fn post(&self, request: OutcomeRequest) -> Result<String, OutcomeError> {
        self.requests.lock().push(request);
        Ok(self.reply.clone())
    }
}

/// Successful outcome envelope, optionally carrying a read score.
pub fn success_envelope(score: Option<&str>) -> String {
    let body = score
        .map(|s| {
            format!(
                "<imsx_POXBody><readResultResponse><result><resultScore>\
                 <textString>{s}</textString></resultScore></result>\
                 </readResultResponse></imsx_POXBody>"
            )
        })
        .unwrap_or_default();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <imsx_POXEnvelopeResponse><imsx_POXHeader><imsx_POXResponseHeaderInfo>\
         <imsx_statusInfo><imsx_codeMajor>success</imsx_codeMajor></imsx_statusInfo>\
         </imsx_POXResponseHeaderInfo></imsx_POXHeader>{body}</imsx_POXEnvelopeResponse>"
    )
}
