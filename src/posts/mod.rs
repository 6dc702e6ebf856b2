//! Post fetching module
//!
//! Home of the Post Fetch Client and the Single Item Resolver:
//! - `PostClient::fetch_page` — one cursor page of posts
//! - `PostClient::fetch_slug_page` — the slug-only projection
//! - `PostClient::resolve_by_slug` — cursor-free point lookup
//!
//! The `PageFetcher` trait is the seam the pagination store (and tests)
//! consume, so the store never touches the transport directly.

mod client;
mod wire;

pub use client::{PageFetcher, PostClient};

#[cfg(test)]
mod tests;
