//! # Launch to Outcome Flow
//!
//! A consumer launches the tool, the provider authenticates the launch, the
//! application reads the context and reports a score back to the consumer's
//! outcome endpoint with the same credentials.

#[cfg(test)]
mod tests {
    use lti_01_signature::HmacSha1Signer;
    use lti_03_launch_validation::{
        InvalidKind, LaunchValidationApi, MessageType, Provider, ProviderConfig,
    };
    use lti_04_outcome_reporting::{
        authorization_header, OutcomeError, OutcomeRequest, OutcomeService, ReqwestTransport,
    };
    use shared_types::{Clock, Credentials, InboundRequest, OutcomeServiceConfig, SystemClock};
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::integration::fixtures::*;

    fn service_request(service: &OutcomeService<RecordingTransport>) -> OutcomeRequest {
        service.transport().requests().pop().unwrap()
    }

    fn graded_launch(service_url: &str, accepted: Option<&str>) -> InboundRequest {
        let mut body = launch_body(SystemClock.now_secs())
            .with("lis_outcome_service_url", service_url)
            .with("lis_result_sourcedid", "grade-cell-9");
        if let Some(accepted) = accepted {
            body = body.with("ext_outcome_data_values_accepted", accepted);
        }
        let request = InboundRequest::new("POST", "/launch")
            .with_header("Host", "tool.example.edu")
            .with_encrypted(true);
        sign_for(request, body, CONSUMER_SECRET)
    }

    #[tokio::test]
    async fn test_launch_context_after_validation() {
        let provider = Provider::new(credentials());
        let request = direct_launch(SystemClock.now_secs());

        assert!(provider.validate(&request, None).await.unwrap().is_valid());

        let context = provider.parse_request(&request, None);
        assert_eq!(context.message_type(), Some(MessageType::BasicLaunch));
        assert!(context.is_launch_request());
        assert_eq!(context.user_id(), Some("u-7"));
        assert_eq!(context.username(), "Ada");
        assert_eq!(context.resource_link_id(), Some("rl-42"));
        assert_eq!(context.context_id(), Some("course-1"));
        assert!(context.params().iter().all(|(k, _)| !k.starts_with("oauth_")));
        assert!(context.outcome_service().is_none());
    }

    #[tokio::test]
    async fn test_validated_launch_reports_score() {
        let provider = Provider::new(credentials());
        let request = graded_launch("https://lms.example.edu/outcomes", Some("text"));
        assert!(provider.validate(&request, None).await.unwrap().is_valid());

        let context = provider.parse_request(&request, None);
        let outcome = context.outcome_service().expect("graded launch");
        let service = OutcomeService::new(
            provider.credentials().clone(),
            outcome,
            RecordingTransport::replying(success_envelope(None)),
        )
        .unwrap();

        assert!(service.supports_result_data(Some("text")));
        assert!(!service.supports_result_data(Some("url")));

        service
            .send_replace_result_with_text(0.8, "Good work")
            .await
            .unwrap();
        assert!(matches!(
            service.send_replace_result_with_url(0.8, "https://x.test").await,
            Err(OutcomeError::Extension(_))
        ));
    }

    #[tokio::test]
    async fn test_configured_result_types_apply_when_consumer_lists_none() {
        let config = ProviderConfig {
            result_data_types: vec!["url".into()],
            ..ProviderConfig::default()
        };
        let provider = Provider::from_config(credentials(), config).unwrap();
        let request = graded_launch("https://lms.example.edu/outcomes", None);
        assert!(provider.validate(&request, None).await.unwrap().is_valid());

        let context = provider.parse_request(&request, None);
        assert_eq!(
            context.outcome_service().unwrap().result_data_types,
            vec!["url".to_string()]
        );
    }

    #[tokio::test]
    async fn test_outcome_round_trip_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/outcomes"))
            .and(header_exists("authorization"))
            .and(body_string_contains("<readResultRequest>"))
            .respond_with(ResponseTemplate::new(200).set_body_string(success_envelope(Some("0.4"))))
            .expect(1)
            .mount(&server)
            .await;

        let provider = Provider::new(credentials());
        let request = graded_launch(&format!("{}/outcomes", server.uri()), None);
        assert!(provider.validate(&request, None).await.unwrap().is_valid());

        let context = provider.parse_request(&request, None);
        let service = OutcomeService::new(
            provider.credentials().clone(),
            context.outcome_service().unwrap(),
            ReqwestTransport::new().unwrap(),
        )
        .unwrap();

        assert_eq!(service.send_read_result().await, Ok(0.4));
    }

    /// Pulls an unescaped field (digits or UUID) out of an Authorization header.
    fn header_field<'a>(header: &'a str, name: &str) -> &'a str {
        let start = header.find(&format!("{name}=\"")).unwrap() + name.len() + 2;
        let len = header[start..].find('"').unwrap();
        &header[start..start + len]
    }

    #[tokio::test]
    async fn test_outcome_authorization_reproducible_with_consumer_secret() {
        let url = "https://lms.example.edu/outcomes?course=1";
        let outcome = OutcomeServiceConfig::new(url, "grade-cell-9");
        let service = OutcomeService::new(
            credentials(),
            &outcome,
            RecordingTransport::replying(success_envelope(None)),
        )
        .unwrap();
        service.send_delete_result().await.unwrap();

        let sent = service_request(&service);
        let nonce = header_field(&sent.authorization, "oauth_nonce");
        let timestamp: u64 = header_field(&sent.authorization, "oauth_timestamp")
            .parse()
            .unwrap();

        let expected = authorization_header(
            &HmacSha1Signer::default(),
            &credentials(),
            url,
            &sent.body,
            nonce,
            timestamp,
        );
        assert_eq!(sent.authorization, expected);

        let forged = authorization_header(
            &HmacSha1Signer::default(),
            &Credentials::new(CONSUMER_KEY, "wrong").unwrap(),
            url,
            &sent.body,
            nonce,
            timestamp,
        );
        assert_ne!(sent.authorization, forged);
    }

    #[tokio::test]
    async fn test_tampered_launch_never_yields_context_use() {
        let provider = Provider::new(credentials());
        let mut request = direct_launch(SystemClock.now_secs());
        request.body = request.body.with("user_id", "someone-else");

        assert_eq!(
            provider.validate(&request, None).await.unwrap().kind(),
            Some(InvalidKind::BadSignature)
        );
    }
}
