//! Owner of the published quiz list.

use std::sync::Arc;

use tokio::sync::watch;

use crate::fetch::{FetchError, FetchOutcome};
use crate::models::QuizItem;

/// What [`QuizStore::apply`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// The list was replaced with this many items.
    Published(usize),
    /// A newer generation is already published; the outcome was dropped.
    Stale,
    /// The fetch failed; the list is unchanged.
    Failed,
}

/// Holds the currently published list and decides which fetch results win.
///
/// A successful outcome replaces the list only when its generation is newer
/// than the one already published, so a slow older request can never
/// overwrite a faster newer one. Failures never touch the list.
pub struct QuizStore {
    published: watch::Sender<Arc<[QuizItem]>>,
    published_generation: u64,
    pending: usize,
    last_error: Option<String>,
}

impl QuizStore {
    pub fn new() -> Self {
        let (published, _) = watch::channel(Arc::<[QuizItem]>::from(Vec::new()));
        Self {
            published,
            published_generation: 0,
            pending: 0,
            last_error: None,
        }
    }

    /// Snapshot of the current list.
    pub fn items(&self) -> Arc<[QuizItem]> {
        Arc::clone(&self.published.borrow())
    }

    /// Receiver that is notified every time the list is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[QuizItem]>> {
        self.published.subscribe()
    }

    pub fn published_generation(&self) -> u64 {
        self.published_generation
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record that a fetch with `generation` is in flight.
    pub fn note_issued(&mut self, generation: u64) {
        log::debug!("generation {} in flight", generation);
        self.pending += 1;
    }

    /// Record a failure that never produced an outcome, such as a bad endpoint.
    pub fn note_error(&mut self, error: &FetchError) {
        log::warn!("{}", error);
        self.last_error = Some(error.to_string());
    }

    pub fn apply(&mut self, outcome: FetchOutcome) -> ApplyResult {
        self.pending = self.pending.saturating_sub(1);

        match outcome.result {
            Ok(_) if outcome.generation <= self.published_generation => {
                log::info!(
                    "discarding generation {}, generation {} is already published",
                    outcome.generation,
                    self.published_generation
                );
                ApplyResult::Stale
            }
            Ok(list) => {
                let count = list.len();
                self.published_generation = outcome.generation;
                self.last_error = None;
                self.published.send_replace(Arc::from(list));
                log::info!("published {} items (generation {})", count, outcome.generation);
                ApplyResult::Published(count)
            }
            Err(error) => {
                self.note_error(&error);
                ApplyResult::Failed
            }
        }
    }
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_item;

    fn success(generation: u64, ids: &[&str]) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Ok(ids.iter().map(|id| test_item(id, "Mars", &["Venus"])).collect()),
        }
    }

    fn ids(store: &QuizStore) -> Vec<String> {
        store.items().iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_starts_empty() {
        let store = QuizStore::new();
        assert!(store.items().is_empty());
        assert_eq!(store.published_generation(), 0);
        assert!(!store.is_loading());
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_publish_replaces_wholesale() {
        let mut store = QuizStore::new();
        assert_eq!(store.apply(success(1, &["a", "b", "c"])), ApplyResult::Published(3));
        assert_eq!(store.apply(success(2, &["d"])), ApplyResult::Published(1));
        assert_eq!(ids(&store), vec!["d"]);
        assert_eq!(store.published_generation(), 2);
    }

    #[test]
    fn test_older_generation_is_stale() {
        let mut store = QuizStore::new();
        store.apply(success(2, &["new"]));
        assert_eq!(store.apply(success(1, &["old"])), ApplyResult::Stale);
        assert_eq!(ids(&store), vec!["new"]);
    }

    #[test]
    fn test_failure_keeps_previous_list() {
        let mut store = QuizStore::new();
        store.apply(success(1, &["a"]));

        let failed = FetchOutcome {
            generation: 2,
            result: Err(FetchError::EmptyResponse),
        };
        assert_eq!(store.apply(failed), ApplyResult::Failed);
        assert_eq!(ids(&store), vec!["a"]);
        assert_eq!(store.last_error(), Some("trivia response had no body"));

        store.apply(success(3, &["b"]));
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_failed_newer_generation_does_not_block_older_success() {
        let mut store = QuizStore::new();
        store.apply(FetchOutcome {
            generation: 2,
            result: Err(FetchError::EmptyResponse),
        });
        assert_eq!(store.apply(success(1, &["a"])), ApplyResult::Published(1));
    }

    #[test]
    fn test_pending_count() {
        let mut store = QuizStore::new();
        store.note_issued(1);
        store.note_issued(2);
        assert!(store.is_loading());

        store.apply(success(2, &["a"]));
        assert!(store.is_loading());
        store.apply(success(1, &["b"]));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_subscribers_see_publication() {
        let mut store = QuizStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.apply(success(1, &["a"]));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update()[0].id, "a");

        store.apply(success(0, &["stale"]));
        assert!(!rx.has_changed().unwrap());
    }
}
