// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Presshead
//!
//! A headless content gateway for a WordPress/WooCommerce blog.
//! Cursor-paginated post fetching over WPGraphQL, with a per-session
//! incremental store for load-more browsing.
//!
//! ## Features
//!
//! - **Post Fetch Client**: one normalized cursor page per call, no caching,
//!   no retries
//! - **Slug Enumerator**: bounded loop over the slug projection for static
//!   path generation
//! - **Pagination Store**: session-scoped append-only list state with an
//!   `is_loading` guard and watch-channel observers
//! - **Single Item Resolver**: cursor-free point lookup by slug
//! - **Intermediary HTTP surface**: the same operations over axum
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use presshead::{GatewayConfig, PageFetcher, PaginationStore, PostClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> presshead::Result<()> {
//!     let config = GatewayConfig::from_env()?;
//!     let client = Arc::new(PostClient::from_config(&config));
//!
//!     // Seed a browsing session from the first page, then load more
//!     let first_page = client.fetch_page(config.page_size, None).await?;
//!     let store = PaginationStore::new(client, config.page_size)?;
//!     store.seed(first_page).await;
//!     while store.has_next_page().await {
//!         store.append_next_page().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Intermediary surface / CLI               │
//! │  GET /api/posts    GET /api/posts/{slug}    GET /api/slugs│
//! └──────────────┬─────────────────┬────────────────┬────────┘
//!                │                 │                │
//!        Pagination Store   Single Item      Slug Enumerator
//!                │           Resolver               │
//!                └────────┬────────┴────────────────┘
//!                  Post Fetch Client
//!                         │
//!                  GraphQL transport ──► upstream WPGraphQL
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the gateway
pub mod error;

/// Common types and the post data model
pub mod types;

/// Environment-driven configuration
pub mod config;

/// GraphQL transport
pub mod graphql;

/// Post fetching and point lookups
pub mod posts;

/// Slug enumeration for static generation
pub mod slugs;

/// Session-scoped pagination store
pub mod store;

/// Command-line interface and HTTP server mode
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GatewayConfig;
pub use error::{Error, Result};
pub use posts::{PageFetcher, PostClient};
pub use slugs::SlugEnumerator;
pub use store::{PaginationState, PaginationStore};
pub use types::{Author, FeaturedImage, PageResult, Post, SlugPage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
