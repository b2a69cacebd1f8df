//! # Concurrent Replay
//!
//! The same signed launch submitted many times at once is accepted exactly
//! once, whichever nonce backend the provider uses.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lti_02_nonce_store::{MemoryCache, NonceStore, SharedCacheNonceStore};
    use lti_03_launch_validation::{InvalidKind, LaunchValidationApi, Provider, ValidationOutcome};
    use shared_types::{Clock, SystemClock};

    use crate::integration::fixtures::*;

    const CONCURRENT_REQUESTS: usize = 16;

    async fn replay_storm<S: NonceStore + 'static>(
        provider: Provider<S>,
    ) -> Vec<ValidationOutcome> {
        let provider = Arc::new(provider);
        let request = Arc::new(direct_launch(SystemClock.now_secs()));

        let handles: Vec<_> = (0..CONCURRENT_REQUESTS)
            .map(|_| {
                let provider = Arc::clone(&provider);
                let request = Arc::clone(&request);
                tokio::spawn(async move { provider.validate(&request, None).await.unwrap() })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(CONCURRENT_REQUESTS);
        for handle in handles {
            outcomes.push(handle.await.unwrap());
        }
        outcomes
    }

    fn assert_single_acceptance(outcomes: &[ValidationOutcome]) {
        let accepted = outcomes.iter().filter(|o| o.is_valid()).count();
        assert_eq!(accepted, 1);
        assert!(outcomes
            .iter()
            .filter(|o| !o.is_valid())
            .all(|o| o.kind() == Some(InvalidKind::StaleOrReusedNonce)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_replay_storm_in_process_store() {
        let outcomes = replay_storm(Provider::new(credentials())).await;
        assert_single_acceptance(&outcomes);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_replay_storm_shared_cache_store() {
        let provider = Provider::new(credentials())
            .with_nonce_store(SharedCacheNonceStore::new(MemoryCache::new()));
        let outcomes = replay_storm(provider).await;
        assert_single_acceptance(&outcomes);
    }

    #[tokio::test]
    async fn test_providers_sharing_a_cache_share_replay_protection() {
        let cache = Arc::new(MemoryCache::new());
        let first = Provider::new(credentials())
            .with_nonce_store(SharedCacheNonceStore::new(Arc::clone(&cache)));
        let second = Provider::new(credentials())
            .with_nonce_store(SharedCacheNonceStore::new(Arc::clone(&cache)));
        let request = direct_launch(SystemClock.now_secs());

        assert!(first.validate(&request, None).await.unwrap().is_valid());
        assert_eq!(
            second.validate(&request, None).await.unwrap().kind(),
            Some(InvalidKind::StaleOrReusedNonce)
        );
    }
}
