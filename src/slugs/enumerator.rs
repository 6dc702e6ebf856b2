//! Looped slug enumeration over the cursor source

use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::posts::PostClient;
use crate::types::SlugPage;
use async_trait::async_trait;
use tracing::debug;

/// Source of slug pages; implemented by `PostClient` and mocked in tests
#[async_trait]
pub trait SlugPageFetcher: Send + Sync {
    /// Fetch one page of slugs after the given cursor
    async fn fetch_slug_page(&self, batch_size: u32, cursor: Option<&str>) -> Result<SlugPage>;
}

#[async_trait]
impl SlugPageFetcher for PostClient {
    async fn fetch_slug_page(&self, batch_size: u32, cursor: Option<&str>) -> Result<SlugPage> {
        PostClient::fetch_slug_page(self, batch_size, cursor).await
    }
}

#[async_trait]
impl<F: SlugPageFetcher> SlugPageFetcher for std::sync::Arc<F> {
    async fn fetch_slug_page(&self, batch_size: u32, cursor: Option<&str>) -> Result<SlugPage> {
        (**self).fetch_slug_page(batch_size, cursor).await
    }
}

/// Enumerates every post slug by repeatedly driving a `SlugPageFetcher`.
///
/// The batch size is deliberately oversized to amortize round-trips. The
/// upstream cursor contract is trusted but bounded: a cursor that fails to
/// advance, or more than `max_pages` pages, aborts with
/// `PaginationProtocolViolation` instead of looping forever.
#[derive(Debug)]
pub struct SlugEnumerator<F> {
    fetcher: F,
    batch_size: u32,
    max_pages: u32,
}

impl<F: SlugPageFetcher> SlugEnumerator<F> {
    /// Create an enumerator with explicit bounds
    pub fn new(fetcher: F, batch_size: u32, max_pages: u32) -> Self {
        Self {
            fetcher,
            batch_size,
            max_pages,
        }
    }

    /// Collect every slug in page order.
    ///
    /// Fails on the first failing page; no partial list is returned.
    pub async fn enumerate_all(&self) -> Result<Vec<String>> {
        let mut slugs = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages: u32 = 0;

        loop {
            let page = self
                .fetcher
                .fetch_slug_page(self.batch_size, cursor.as_deref())
                .await?;
            pages += 1;
            slugs.extend(page.slugs);

            if !page.has_next_page {
                break;
            }
            if pages >= self.max_pages {
                return Err(Error::protocol_violation(format!(
                    "upstream still reports more pages after {pages} pages"
                )));
            }
            if page.end_cursor == cursor {
                return Err(Error::protocol_violation(
                    "cursor did not advance between pages",
                ));
            }
            cursor = page.end_cursor;
        }

        debug!("Enumerated {} slugs across {} pages", slugs.len(), pages);
        Ok(slugs)
    }
}

impl SlugEnumerator<PostClient> {
    /// Create an enumerator over a fresh client from gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(
            PostClient::from_config(config),
            config.slug_batch_size,
            config.max_slug_pages,
        )
    }
}
