//! Post Fetch Client and Single Item Resolver
//!
//! Every method performs exactly one upstream call and surfaces failures
//! to the caller unchanged; there is no caching and no retry here.

use super::wire;
use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::graphql::{queries, GraphqlClient};
use crate::types::{PageResult, Post, SlugPage};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Seam between the pagination store and the transport.
///
/// The store only ever needs "give me the page after this cursor"; going
/// through a trait keeps it testable without a network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of posts after the given cursor (`None` = from the
    /// beginning)
    async fn fetch_page(&self, page_size: u32, cursor: Option<&str>) -> Result<PageResult>;
}

/// Client for paged and point lookups of posts
#[derive(Debug, Clone)]
pub struct PostClient {
    graphql: GraphqlClient,
}

impl PostClient {
    /// Create a client over an existing GraphQL transport
    pub fn new(graphql: GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Create a client from gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(GraphqlClient::from_config(config))
    }

    /// Fetch one page of posts.
    ///
    /// `page_size` must be positive; the upstream may silently cap it.
    /// On failure nothing partial is returned.
    pub async fn fetch_page(&self, page_size: u32, cursor: Option<&str>) -> Result<PageResult> {
        validate_page_size(page_size)?;

        let data = self
            .graphql
            .execute(
                queries::POSTS_PAGE,
                json!({ "first": page_size, "after": cursor }),
            )
            .await?;

        let parsed: wire::PostsData = serde_json::from_value(data)
            .map_err(|e| Error::malformed(format!("unexpected posts shape: {e}")))?;

        let page = PageResult {
            items: parsed.posts.nodes.into_iter().map(Post::from).collect(),
            end_cursor: parsed.posts.page_info.end_cursor,
            has_next_page: parsed.posts.page_info.has_next_page,
        };

        debug!(
            "Fetched page of {} posts (has_next_page={})",
            page.items.len(),
            page.has_next_page
        );
        Ok(page)
    }

    /// Fetch one page of the slug-only projection
    pub async fn fetch_slug_page(&self, batch_size: u32, cursor: Option<&str>) -> Result<SlugPage> {
        validate_page_size(batch_size)?;

        let data = self
            .graphql
            .execute(
                queries::SLUG_PAGE,
                json!({ "first": batch_size, "after": cursor }),
            )
            .await?;

        let parsed: wire::SlugsData = serde_json::from_value(data)
            .map_err(|e| Error::malformed(format!("unexpected slugs shape: {e}")))?;

        Ok(SlugPage {
            slugs: parsed.posts.nodes.into_iter().map(|n| n.slug).collect(),
            end_cursor: parsed.posts.page_info.end_cursor,
            has_next_page: parsed.posts.page_info.has_next_page,
        })
    }

    /// Resolve one post by slug, full detail.
    ///
    /// An upstream `post: null` is a normal `None`, not an error.
    pub async fn resolve_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        if slug.is_empty() {
            return Err(Error::config("slug must not be empty"));
        }

        let data = self
            .graphql
            .execute(queries::POST_BY_SLUG, json!({ "slug": slug }))
            .await?;

        let parsed: wire::PostBySlugData = serde_json::from_value(data)
            .map_err(|e| Error::malformed(format!("unexpected post shape: {e}")))?;

        Ok(parsed.post.map(Post::from))
    }
}

#[async_trait]
impl PageFetcher for PostClient {
    async fn fetch_page(&self, page_size: u32, cursor: Option<&str>) -> Result<PageResult> {
        PostClient::fetch_page(self, page_size, cursor).await
    }
}

fn validate_page_size(page_size: u32) -> Result<()> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize { got: 0 });
    }
    Ok(())
}
