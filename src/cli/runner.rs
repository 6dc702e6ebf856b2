//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::posts::{PageFetcher, PostClient};
use crate::slugs::SlugEnumerator;
use crate::store::PaginationStore;
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Posts { first, after } => self.posts(*first, after.as_deref()).await,
            Commands::Post { slug } => self.post(slug).await,
            Commands::Slugs { batch_size } => self.slugs(*batch_size).await,
            Commands::Browse { pages } => self.browse(*pages).await,
            Commands::Serve { port } => {
                let config = self.config()?;
                crate::cli::server::serve(config, *port).await
            }
        }
    }

    /// Resolve configuration: environment first, `--upstream` overrides
    /// the endpoint
    fn config(&self) -> Result<GatewayConfig> {
        match (&self.cli.upstream, GatewayConfig::from_env()) {
            (Some(url), Ok(config)) => config.with_upstream_url(url),
            (Some(url), Err(Error::MissingEnvVar { .. })) => GatewayConfig::new(url),
            (_, result) => result,
        }
    }

    async fn posts(&self, first: Option<u32>, after: Option<&str>) -> Result<()> {
        let config = self.config()?;
        let client = PostClient::from_config(&config);

        let page = client
            .fetch_page(first.unwrap_or(config.page_size), after)
            .await?;
        println!("{}", serde_json::to_string_pretty(&page)?);
        Ok(())
    }

    async fn post(&self, slug: &str) -> Result<()> {
        let config = self.config()?;
        let client = PostClient::from_config(&config);

        match client.resolve_by_slug(slug).await? {
            Some(post) => println!("{}", serde_json::to_string_pretty(&post)?),
            None => println!("Post not found: {slug}"),
        }
        Ok(())
    }

    async fn slugs(&self, batch_size: Option<u32>) -> Result<()> {
        let mut config = self.config()?;
        if let Some(batch_size) = batch_size {
            config = config.with_slug_batch_size(batch_size);
        }

        let enumerator = SlugEnumerator::from_config(&config);
        let slugs = enumerator.enumerate_all().await?;
        println!("{}", serde_json::to_string_pretty(&slugs)?);
        Ok(())
    }

    /// Exercise the store the way a browsing session would: seed from the
    /// first page, then load-more until exhausted or the page budget runs
    /// out
    async fn browse(&self, pages: u32) -> Result<()> {
        let config = self.config()?;
        let client = Arc::new(PostClient::from_config(&config));

        let first_page = client.fetch_page(config.page_size, None).await?;
        let store = PaginationStore::new(
            Arc::clone(&client) as Arc<dyn PageFetcher>,
            config.page_size,
        )?;
        store.seed(first_page).await;

        let mut appended = 1;
        while appended < pages && store.has_next_page().await {
            store.append_next_page().await?;
            appended += 1;
        }

        let state = store.snapshot().await;
        info!(
            "Browsed {appended} pages: {} posts accumulated (has_next_page={})",
            state.items.len(),
            state.has_next_page
        );
        println!("{}", serde_json::to_string_pretty(&state)?);
        Ok(())
    }
}
