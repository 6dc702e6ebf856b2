//! Pagination store implementation
//!
//! The store owns the session's `PaginationState` behind a `RwLock` and
//! publishes an atomic snapshot through a watch channel after every
//! transition. The `is_loading` check-and-set happens under the write lock
//! *before* the fetch await point: that flag is the sole concurrency
//! control, so at most one append is ever in flight and pages land in
//! strictly increasing cursor order.

use super::types::PaginationState;
use crate::error::{Error, Result};
use crate::posts::PageFetcher;
use crate::types::PageResult;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

/// Session-scoped store over a page fetcher
pub struct PaginationStore {
    fetcher: Arc<dyn PageFetcher>,
    page_size: u32,
    state: Arc<RwLock<PaginationState>>,
    watch_tx: Arc<watch::Sender<PaginationState>>,
}

impl PaginationStore {
    /// Create an empty store fetching `page_size` posts per append
    pub fn new(fetcher: Arc<dyn PageFetcher>, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize { got: 0 });
        }

        let initial = PaginationState::new();
        let (watch_tx, _) = watch::channel(initial.clone());

        Ok(Self {
            fetcher,
            page_size,
            state: Arc::new(RwLock::new(initial)),
            watch_tx: Arc::new(watch_tx),
        })
    }

    /// Subscribe to state snapshots; the receiver always holds the latest
    /// atomic snapshot
    pub fn subscribe(&self) -> watch::Receiver<PaginationState> {
        self.watch_tx.subscribe()
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> PaginationState {
        self.state.read().await.clone()
    }

    /// Whether another page can still be appended
    pub async fn has_next_page(&self) -> bool {
        self.state.read().await.has_next_page
    }

    /// Whether an append is currently in flight
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Append the next page of posts.
    ///
    /// Returns `Ok(true)` when a page was appended, `Ok(false)` when the
    /// call was coalesced (an append already in flight) or the listing is
    /// exhausted. On failure the accumulated items, cursor and flag are
    /// left untouched and `is_loading` is cleared; a later call retries
    /// from the same cursor.
    pub async fn append_next_page(&self) -> Result<bool> {
        // Check-and-set under the write lock, before any await on the
        // network: re-entrant calls see is_loading=true and coalesce.
        let cursor = {
            let mut state = self.state.write().await;
            if state.is_loading {
                debug!("append_next_page coalesced: a fetch is already in flight");
                return Ok(false);
            }
            if !state.has_next_page {
                debug!("append_next_page skipped: listing exhausted");
                return Ok(false);
            }
            state.is_loading = true;
            self.publish(&state);
            state.end_cursor.clone()
        };

        let result = self.fetcher.fetch_page(self.page_size, cursor.as_deref()).await;

        let mut state = self.state.write().await;
        match result {
            Ok(page) => {
                let appended = page.items.len();
                state.items.extend(page.items);
                state.end_cursor = page.end_cursor;
                state.has_next_page = page.has_next_page;
                state.is_loading = false;
                self.publish(&state);
                debug!(
                    "Appended {appended} posts (total={}, has_next_page={})",
                    state.items.len(),
                    state.has_next_page
                );
                Ok(true)
            }
            Err(e) => {
                // Prior items/cursor/flag stay exactly as they were; the
                // store never enters an error state and never auto-retries.
                state.is_loading = false;
                self.publish(&state);
                warn!("Failed to append next page: {e}");
                Err(e)
            }
        }
    }

    /// Overwrite the store from a server-rendered first page.
    ///
    /// This is a one-shot session bootstrap, distinct from append: it
    /// installs the page's true cursor and flags. Only `reset` ever forces
    /// the cursor back to `None`.
    pub async fn seed(&self, page: PageResult) {
        let mut state = self.state.write().await;
        state.items = page.items;
        state.end_cursor = page.end_cursor;
        state.has_next_page = page.has_next_page;
        state.is_loading = false;
        self.publish(&state);
    }

    /// Unconditionally return to the fresh session state
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        *state = PaginationState::new();
        self.publish(&state);
    }

    /// Push an atomic snapshot to observers
    fn publish(&self, state: &PaginationState) {
        self.watch_tx.send_replace(state.clone());
    }
}

impl Clone for PaginationStore {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            page_size: self.page_size,
            state: Arc::clone(&self.state),
            watch_tx: Arc::clone(&self.watch_tx),
        }
    }
}

impl std::fmt::Debug for PaginationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationStore")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
