//! CLI module
//!
//! Command-line interface for the gateway.
//!
//! # Commands
//!
//! - `posts` - Fetch one page of posts
//! - `post` - Resolve one post by slug
//! - `slugs` - Enumerate every post slug
//! - `browse` - Simulate a load-more browsing session
//! - `serve` - Start the intermediary HTTP surface

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{router, serve};
