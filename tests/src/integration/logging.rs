//! # Host Logging
//!
//! A host application installs the subscriber once and then runs launches
//! through it; rejection paths log without panicking.

#[cfg(test)]
mod tests {
    use lti_03_launch_validation::{InvalidKind, LaunchValidationApi, Provider};
    use lti_telemetry::{init_logging, TelemetryConfig};
    use shared_types::{Clock, SystemClock};

    use crate::integration::fixtures::*;

    #[tokio::test]
    async fn test_launches_run_under_installed_subscriber() {
        let config = TelemetryConfig {
            log_level: "debug".into(),
            console_output: false,
            ..TelemetryConfig::from_lookup(|_| None)
        };
        init_logging(&config).unwrap();

        let provider = Provider::new(credentials());
        let request = direct_launch(SystemClock.now_secs());
        assert!(provider.validate(&request, None).await.unwrap().is_valid());
        assert_eq!(
            provider.validate(&request, None).await.unwrap().kind(),
            Some(InvalidKind::StaleOrReusedNonce)
        );
    }
}
