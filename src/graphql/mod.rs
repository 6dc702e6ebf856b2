//! GraphQL transport module
//!
//! Thin client for the upstream WPGraphQL endpoint. Each call is a single
//! independent POST: no caching, no retries, no request coalescing. Failure
//! classification happens here so callers only see the gateway error
//! taxonomy.

mod client;
pub mod queries;

pub use client::GraphqlClient;
