//! # Origin Reconstruction
//!
//! Consumers sign the URL they posted to. These flows deliver launches through
//! a reverse proxy or with vendor-specific query handling and check that the
//! provider rebuilds the same URL.

#[cfg(test)]
mod tests {
    use lti_01_signature::PRODUCT_FAMILY_PARAM;
    use lti_03_launch_validation::{
        ConfigurationError, InvalidKind, LaunchValidationApi, Provider, ProviderConfig,
        ProviderError,
    };
    use shared_types::{Clock, InboundRequest, Parameters, SystemClock};

    use crate::integration::fixtures::*;

    /// Body signed against `https://tool.example.edu/launch`.
    fn publicly_signed_body() -> Parameters {
        let public = InboundRequest::new("POST", "/launch")
            .with_header("Host", "tool.example.edu")
            .with_protocol("https");
        sign_for(public, launch_body(SystemClock.now_secs()), CONSUMER_SECRET).body
    }

    fn proxied(headers: &[(&str, &str)], body: Parameters) -> InboundRequest {
        headers
            .iter()
            .fold(
                InboundRequest::new("POST", "/launch").with_header("Host", "10.0.0.5:8080"),
                |req, (name, value)| req.with_header(name, *value),
            )
            .with_body(body)
    }

    fn trusting_proxy(app_host: Option<&str>) -> Provider {
        let config = ProviderConfig {
            trust_proxy: true,
            app_host: app_host.map(str::to_string),
            ..ProviderConfig::default()
        };
        Provider::from_config(credentials(), config).unwrap()
    }

    #[tokio::test]
    async fn test_configured_app_host_behind_proxy() {
        let provider = trusting_proxy(Some("tool.example.edu"));
        let request = proxied(&[("X-Forwarded-Proto", "https")], publicly_signed_body());

        assert!(provider.validate(&request, None).await.unwrap().is_valid());
    }

    #[tokio::test]
    async fn test_forwarded_host_behind_proxy() {
        let provider = trusting_proxy(None);
        let request = proxied(
            &[
                ("X-Forwarded-Host", "tool.example.edu"),
                ("X-Forwarded-Proto", "https"),
            ],
            publicly_signed_body(),
        );

        assert!(provider.validate(&request, None).await.unwrap().is_valid());
    }

    #[tokio::test]
    async fn test_forwarded_headers_ignored_without_trust() {
        let provider = Provider::new(credentials());
        let request = proxied(
            &[
                ("X-Forwarded-Host", "tool.example.edu"),
                ("X-Forwarded-Proto", "https"),
            ],
            publicly_signed_body(),
        );

        assert_eq!(
            provider.validate(&request, None).await.unwrap().kind(),
            Some(InvalidKind::BadSignature)
        );
    }

    #[tokio::test]
    async fn test_trusted_proxy_without_host_source_is_configuration_error() {
        let provider = trusting_proxy(None);
        let request = proxied(&[("X-Forwarded-Proto", "https")], publicly_signed_body());

        assert!(matches!(
            provider.validate(&request, None).await,
            Err(ProviderError::Configuration(ConfigurationError::Origin(_)))
        ));
    }

    #[tokio::test]
    async fn test_vendor_query_handling() {
        let provider = Provider::new(credentials());

        for (family, valid) in [("canvas", true), ("schoology", true), ("moodle", false)] {
            let signed_view = InboundRequest::new("POST", "/launch")
                .with_header("Host", "tool.example.edu")
                .with_encrypted(true);
            let body = launch_body(SystemClock.now_secs()).with(PRODUCT_FAMILY_PARAM, family);
            let body = sign_for(signed_view, body, CONSUMER_SECRET).body;

            let delivered = InboundRequest::new("POST", "/launch?section=3")
                .with_header("Host", "tool.example.edu")
                .with_encrypted(true)
                .with_body(body);

            assert_eq!(
                provider.validate(&delivered, None).await.unwrap().is_valid(),
                valid,
                "{family}"
            );
        }
    }
}
