use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::transport::RelayTransport;
use crate::domain::{
    validate_advice_request, AdviceRequest, DomainError, RequestKind, ResponseCache,
    EMPTY_RESPONSE_FALLBACK,
};

/// Answer handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub text: String,
    /// Served from the response cache without contacting the relay
    pub cached: bool,
}

/// Composes advice requests for the relay.
///
/// Each request kind behaves like its own form: at most one request of a
/// kind is outstanding at a time. Successful answers are cached by
/// fingerprint; errors and the empty-answer fallback are not.
#[derive(Debug)]
pub struct AdviceClient {
    transport: Arc<dyn RelayTransport>,
    cache: ResponseCache,
    use_cache: bool,
    in_flight: [AtomicBool; RequestKind::ALL.len()],
}

/// Clears the in-flight flag for a kind when the request finishes
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AdviceClient {
    pub fn new(transport: Arc<dyn RelayTransport>, cache: ResponseCache) -> Self {
        Self {
            transport,
            cache,
            use_cache: true,
            in_flight: Default::default(),
        }
    }

    /// Skip cache lookups; fresh answers are still stored
    pub fn without_cache_lookup(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn slot(&self, kind: RequestKind) -> &AtomicBool {
        let index = match kind {
            RequestKind::Plan => 0,
            RequestKind::Compatibility => 1,
            RequestKind::Troubleshoot => 2,
        };
        &self.in_flight[index]
    }

    fn begin(&self, kind: RequestKind) -> Result<InFlightGuard<'_>, DomainError> {
        let slot = self.slot(kind);

        slot.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| DomainError::request_in_flight(kind.as_str()))?;

        Ok(InFlightGuard(slot))
    }

    /// Validate, consult the cache, then send exactly one request.
    pub async fn submit(&self, request: &AdviceRequest) -> Result<Advice, DomainError> {
        validate_advice_request(request)?;

        let kind = request.kind();
        let _guard = self.begin(kind)?;
        let fingerprint = request.fingerprint()?;

        if self.use_cache {
            if let Some(text) = self.cache.get(&fingerprint).await {
                debug!(kind = %kind, "Serving advice from cache");
                return Ok(Advice { text, cached: true });
            }
        }

        let text = self.transport.send(request).await?;

        if text == EMPTY_RESPONSE_FALLBACK {
            debug!(kind = %kind, "Relay returned the empty-answer fallback, not caching");
        } else {
            self.cache.set(&fingerprint, &text).await;
        }

        info!(kind = %kind, chars = text.chars().count(), "Advice received");

        Ok(Advice {
            text,
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockRelayTransport;
    use crate::domain::CacheStore;
    use crate::infrastructure::cache::InMemoryStore;
    use tokio::sync::Notify;

    fn client(transport: Arc<MockRelayTransport>) -> (AdviceClient, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let client = AdviceClient::new(transport, ResponseCache::new(store.clone()));
        (client, store)
    }

    async fn wait_for_calls(transport: &MockRelayTransport, calls: usize) {
        while transport.calls() < calls {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_cache_hit_ignores_case_and_whitespace() {
        let transport = Arc::new(MockRelayTransport::new().with_response("**YES**"));
        let (client, _) = client(transport.clone());

        let first = client
            .submit(&AdviceRequest::compatibility("Philips Hue", "Echo Dot"))
            .await
            .unwrap();
        let second = client
            .submit(&AdviceRequest::compatibility("  philips HUE ", "ECHO dot"))
            .await
            .unwrap();

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(second.text, "**YES**");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let transport = Arc::new(
            MockRelayTransport::new().with_error(429, "Gemini API Error (429): quota"),
        );
        let (client, store) = client(transport.clone());
        let request = AdviceRequest::troubleshoot("Hub offline");

        let err = client.submit(&request).await.unwrap_err();
        assert_eq!(err.upstream_status(), Some(429));
        assert!(err.to_string().contains("429"));

        client.submit(&request).await.unwrap_err();
        assert_eq!(transport.calls(), 2);
        assert_eq!(store.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fallback_is_not_cached() {
        let transport = Arc::new(MockRelayTransport::new().with_response(EMPTY_RESPONSE_FALLBACK));
        let (client, _) = client(transport.clone());
        let request = AdviceRequest::troubleshoot("Hub offline");

        let advice = client.submit(&request).await.unwrap();
        assert_eq!(advice.text, EMPTY_RESPONSE_FALLBACK);

        client.submit(&request).await.unwrap();
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_sent() {
        let transport = Arc::new(MockRelayTransport::new().with_response("unused"));
        let (client, _) = client(transport.clone());

        let err = client
            .submit(&AdviceRequest::plan("House", "Alexa", "$1000", vec![], "Expert"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_without_cache_lookup_refreshes_entry() {
        let transport = Arc::new(MockRelayTransport::new().with_response("fresh"));
        let store = Arc::new(InMemoryStore::new());
        let cache = ResponseCache::new(store.clone());
        let request = AdviceRequest::troubleshoot("Hub offline");
        cache.set(&request.fingerprint().unwrap(), "stale").await;

        let client = AdviceClient::new(transport.clone(), cache).without_cache_lookup();
        let advice = client.submit(&request).await.unwrap();

        assert_eq!(advice.text, "fresh");
        assert_eq!(transport.calls(), 1);
        assert_eq!(
            client.cache().get(&request.fingerprint().unwrap()).await,
            Some("fresh".to_string())
        );
    }

    #[tokio::test]
    async fn test_second_submit_of_same_kind_is_rejected() {
        let gate = Arc::new(Notify::new());
        let transport = Arc::new(
            MockRelayTransport::new()
                .with_response("Restart the hub.")
                .with_gate(gate.clone()),
        );
        let (client, _) = client(transport.clone());
        let client = Arc::new(client);

        let first = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .submit(&AdviceRequest::troubleshoot("Hub offline"))
                    .await
            }
        });
        wait_for_calls(&transport, 1).await;

        let err = client
            .submit(&AdviceRequest::troubleshoot("Lights flicker"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RequestInFlight { .. }));

        gate.notify_one();
        let advice = first.await.unwrap().unwrap();
        assert_eq!(advice.text, "Restart the hub.");
        assert_eq!(transport.calls(), 1);

        // Slot is free again once the first request finished
        gate.notify_one();
        client
            .submit(&AdviceRequest::troubleshoot("Lights flicker"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_different_kinds_may_overlap() {
        let gate = Arc::new(Notify::new());
        let transport = Arc::new(
            MockRelayTransport::new()
                .with_response("ok")
                .with_gate(gate.clone()),
        );
        let (client, _) = client(transport.clone());
        let client = Arc::new(client);

        let troubleshoot = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .submit(&AdviceRequest::troubleshoot("Hub offline"))
                    .await
            }
        });
        wait_for_calls(&transport, 1).await;

        let compat = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .submit(&AdviceRequest::compatibility("Hue", "Echo"))
                    .await
            }
        });
        wait_for_calls(&transport, 2).await;

        gate.notify_waiters();
        assert!(troubleshoot.await.unwrap().is_ok());
        assert!(compat.await.unwrap().is_ok());
    }
}
