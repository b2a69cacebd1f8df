//! # Backend Equivalence
//!
//! A provider gives the same answer for the same launch sequence whether its
//! nonces live in process memory or in a shared cache.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lti_02_nonce_store::{MemoryCache, MemoryNonceStore, NonceStore, SharedCacheNonceStore};
    use lti_03_launch_validation::{LaunchValidationApi, Provider, ValidationOutcome};
    use proptest::prelude::*;
    use shared_types::{Clock, InboundRequest, ManualClock};

    use crate::integration::fixtures::*;

    const START: u64 = 1_700_000_000;

    /// One step of a launch sequence.
    #[derive(Debug, Clone)]
    struct Step {
        nonce: u8,
        age: u64,
        advance: u64,
    }

    fn step() -> impl Strategy<Value = Step> {
        (0u8..6, 0u64..400, 0u64..200).prop_map(|(nonce, age, advance)| Step {
            nonce,
            age,
            advance,
        })
    }

    fn launch(nonce: u8, timestamp: u64) -> InboundRequest {
        let body = launch_body(timestamp).with("oauth_nonce", format!("nonce-{nonce}"));
        let request =
            InboundRequest::new("POST", "/launch").with_header("Host", "tool.example.edu");
        sign_for(request, body, CONSUMER_SECRET)
    }

    async fn run<S: NonceStore>(
        provider: &Provider<S>,
        clock: &ManualClock,
        steps: &[Step],
    ) -> Vec<ValidationOutcome> {
        let mut outcomes = Vec::with_capacity(steps.len());
        for step in steps {
            clock.advance(step.advance);
            let timestamp = clock.now_secs().saturating_sub(step.age);
            outcomes.push(
                provider
                    .validate(&launch(step.nonce, timestamp), None)
                    .await
                    .unwrap(),
            );
        }
        outcomes
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_providers_agree_across_backends(steps in prop::collection::vec(step(), 1..24)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

            let memory_clock = ManualClock::new_shared(START);
            let memory = Provider::new(credentials()).with_nonce_store(
                MemoryNonceStore::new().with_clock(memory_clock.clone() as Arc<dyn Clock>),
            );

            let shared_clock = ManualClock::new_shared(START);
            let shared = Provider::new(credentials()).with_nonce_store(
                SharedCacheNonceStore::new(
                    MemoryCache::new().with_clock(shared_clock.clone() as Arc<dyn Clock>),
                )
                .with_key_prefix("lti:nonce:")
                .with_clock(shared_clock.clone() as Arc<dyn Clock>),
            );

            let (left, right) = runtime.block_on(async {
                (
                    run(&memory, &memory_clock, &steps).await,
                    run(&shared, &shared_clock, &steps).await,
                )
            });
            prop_assert_eq!(left, right);
        }
    }

    #[tokio::test]
    async fn test_window_boundary_matches() {
        let clock = ManualClock::new_shared(START);
        let memory = Provider::new(credentials())
            .with_nonce_store(MemoryNonceStore::new().with_clock(clock.clone() as Arc<dyn Clock>));
        let shared = Provider::new(credentials()).with_nonce_store(
            SharedCacheNonceStore::new(
                MemoryCache::new().with_clock(clock.clone() as Arc<dyn Clock>),
            )
            .with_clock(clock.clone() as Arc<dyn Clock>),
        );

        // 300 seconds old is still inside the default window; 301 is not.
        for (nonce, age, valid) in [(1, 300, true), (2, 301, false)] {
            let request = launch(nonce, START - age);
            assert_eq!(memory.validate(&request, None).await.unwrap().is_valid(), valid);
            assert_eq!(shared.validate(&request, None).await.unwrap().is_valid(), valid);
        }
    }
}
