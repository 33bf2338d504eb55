use tokio_util::sync::CancellationToken;

use super::error::ApiError;
use super::types::PublicConfigResponse;

/// Handle for one issued public-config request
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub generation: u64,
    pub cancel: CancellationToken,
}

/// One-slot result cache for `GET /v1/config/public`.
///
/// Only the most recently issued request may commit. Older requests are
/// cancelled when superseded, and their results are dropped if they still
/// arrive.
#[derive(Debug)]
pub struct PublicConfigStore {
    pub data: Option<PublicConfigResponse>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
    in_flight: Option<CancellationToken>,
    lifetime: CancellationToken,
}

impl PublicConfigStore {
    pub fn new() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
            in_flight: None,
            lifetime: CancellationToken::new(),
        }
    }

    /// Start a new fetch, superseding any in-flight one.
    pub fn refresh(&mut self) -> FetchTicket {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }

        self.generation += 1;
        self.loading = true;
        self.error = None;

        let cancel = self.lifetime.child_token();
        self.in_flight = Some(cancel.clone());

        FetchTicket {
            generation: self.generation,
            cancel,
        }
    }

    /// Apply a fetch result. Returns false when the result is stale and was ignored.
    pub fn commit(
        &mut self,
        generation: u64,
        result: Result<PublicConfigResponse, ApiError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale public config result"
            );
            return false;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(status = ?err.status(), error = %err, "public config fetch failed");
                self.data = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Cancel everything this store ever issued.
    pub fn shutdown(&mut self) {
        self.lifetime.cancel();
        self.in_flight = None;
    }
}

impl Default for PublicConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::FeatureFlags;

    fn sample() -> PublicConfigResponse {
        PublicConfigResponse {
            api_key_configured: true,
            openai_configured: true,
            features: FeatureFlags {
                webhooks_configured: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn starts_idle() {
        let store = PublicConfigStore::new();
        assert!(!store.loading);
        assert!(store.data.is_none());
        assert!(store.error.is_none());
    }

    #[test]
    fn success_sets_data_and_clears_loading() {
        let mut store = PublicConfigStore::new();
        let ticket = store.refresh();
        assert!(store.loading);

        assert!(store.commit(ticket.generation, Ok(sample())));
        assert!(!store.loading);
        assert_eq!(store.data, Some(sample()));
        assert!(store.error.is_none());
    }

    #[test]
    fn failure_clears_data_and_sets_message() {
        let mut store = PublicConfigStore::new();
        let first = store.refresh();
        store.commit(first.generation, Ok(sample()));

        let second = store.refresh();
        assert!(store.error.is_none());
        store.commit(
            second.generation,
            Err(ApiError::ServerRejected {
                status: 502,
                body: String::new(),
            }),
        );

        assert!(store.data.is_none());
        assert!(!store.loading);
        assert_eq!(
            store.error.as_deref(),
            Some("Request failed with status 502")
        );
    }

    #[test]
    fn refresh_cancels_superseded_request() {
        let mut store = PublicConfigStore::new();
        let first = store.refresh();
        let second = store.refresh();

        assert!(first.cancel.is_cancelled());
        assert!(!second.cancel.is_cancelled());
        assert!(second.generation > first.generation);
    }

    #[test]
    fn stale_result_does_not_overwrite_newer_state() {
        let mut store = PublicConfigStore::new();
        let first = store.refresh();
        let second = store.refresh();

        assert!(store.commit(second.generation, Ok(sample())));
        assert!(!store.commit(
            first.generation,
            Err(ApiError::Decode("late".to_string()))
        ));

        assert_eq!(store.data, Some(sample()));
        assert!(store.error.is_none());
    }

    #[test]
    fn stale_result_keeps_loading_for_latest() {
        let mut store = PublicConfigStore::new();
        let first = store.refresh();
        let _second = store.refresh();

        store.commit(first.generation, Ok(sample()));
        assert!(store.loading);
        assert!(store.data.is_none());
    }

    #[test]
    fn shutdown_cancels_in_flight() {
        let mut store = PublicConfigStore::new();
        let ticket = store.refresh();
        store.shutdown();
        assert!(ticket.cancel.is_cancelled());
    }
}
