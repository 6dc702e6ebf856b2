//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Presshead gateway CLI
#[derive(Parser, Debug)]
#[command(name = "presshead")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Upstream GraphQL endpoint (overrides WORDPRESS_GRAPHQL_URL)
    #[arg(short, long, global = true)]
    pub upstream: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of posts
    Posts {
        /// Page size (defaults to the configured page size)
        #[arg(long)]
        first: Option<u32>,

        /// Resume cursor from a previous page
        #[arg(long)]
        after: Option<String>,
    },

    /// Resolve one post by slug, full detail
    Post {
        /// Post slug
        #[arg(long)]
        slug: String,
    },

    /// Enumerate every post slug for static generation
    Slugs {
        /// Batch size override
        #[arg(long)]
        batch_size: Option<u32>,
    },

    /// Simulate a load-more browsing session against the store
    Browse {
        /// Maximum number of pages to append
        #[arg(long, default_value = "3")]
        pages: u32,
    },

    /// Start the intermediary HTTP surface
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}
