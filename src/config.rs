//! Gateway configuration
//!
//! Configuration comes from the environment and is read at first use;
//! a missing endpoint surfaces as an error from the constructor rather
//! than being validated proactively at process start.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Environment variable holding the upstream WPGraphQL endpoint
pub const ENV_GRAPHQL_URL: &str = "WORDPRESS_GRAPHQL_URL";

/// Environment variable overriding the listing page size
pub const ENV_PAGE_SIZE: &str = "PRESSHEAD_PAGE_SIZE";

/// Environment variable overriding the slug enumeration batch size
pub const ENV_SLUG_BATCH_SIZE: &str = "PRESSHEAD_SLUG_BATCH_SIZE";

/// Environment variable overriding the slug enumeration page cap
pub const ENV_MAX_SLUG_PAGES: &str = "PRESSHEAD_MAX_SLUG_PAGES";

/// Environment variable overriding the upstream request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "PRESSHEAD_TIMEOUT_SECS";

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_SLUG_BATCH_SIZE: u32 = 100;
const DEFAULT_MAX_SLUG_PAGES: u32 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstream WPGraphQL endpoint
    pub upstream_url: String,
    /// Page size for listing fetches
    pub page_size: u32,
    /// Oversized batch size for slug enumeration
    pub slug_batch_size: u32,
    /// Upper bound on enumeration pages before the protocol guard trips
    pub max_slug_pages: u32,
    /// Upstream request timeout
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a config with defaults for the given upstream endpoint
    pub fn new(upstream_url: impl Into<String>) -> Result<Self> {
        let upstream_url = upstream_url.into();
        Url::parse(&upstream_url)?;

        Ok(Self {
            upstream_url,
            page_size: DEFAULT_PAGE_SIZE,
            slug_batch_size: DEFAULT_SLUG_BATCH_SIZE,
            max_slug_pages: DEFAULT_MAX_SLUG_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an injectable variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let upstream_url = lookup(ENV_GRAPHQL_URL).ok_or_else(|| Error::missing_env(ENV_GRAPHQL_URL))?;
        let mut config = Self::new(upstream_url)?;

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_positive(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SLUG_BATCH_SIZE) {
            config.slug_batch_size = parse_positive(ENV_SLUG_BATCH_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_SLUG_PAGES) {
            config.max_slug_pages = parse_positive(ENV_MAX_SLUG_PAGES, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| Error::config(format!("{ENV_TIMEOUT_SECS} must be an integer, got '{raw}'")))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the upstream endpoint, keeping all other settings
    pub fn with_upstream_url(mut self, upstream_url: impl Into<String>) -> Result<Self> {
        let upstream_url = upstream_url.into();
        Url::parse(&upstream_url)?;
        self.upstream_url = upstream_url;
        Ok(self)
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the slug batch size
    #[must_use]
    pub fn with_slug_batch_size(mut self, batch_size: u32) -> Self {
        self.slug_batch_size = batch_size;
        self
    }

    /// Override the enumeration page cap
    #[must_use]
    pub fn with_max_slug_pages(mut self, max_pages: u32) -> Self {
        self.max_slug_pages = max_pages;
        self
    }

    /// Override the upstream timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_positive(var: &str, raw: &str) -> Result<u32> {
    let value: u32 = raw
        .parse()
        .map_err(|_| Error::config(format!("{var} must be a positive integer, got '{raw}'")))?;
    if value == 0 {
        return Err(Error::config(format!("{var} must be a positive integer, got '0'")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::new("https://blog.example.com/graphql").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.slug_batch_size, 100);
        assert_eq!(config.max_slug_pages, 1000);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = GatewayConfig::new("not a url");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_missing_endpoint_is_an_error_at_first_use() {
        let result = GatewayConfig::from_lookup(|_| None);
        assert!(matches!(result, Err(Error::MissingEnvVar { ref var }) if var == ENV_GRAPHQL_URL));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = GatewayConfig::from_lookup(|var| match var {
            ENV_GRAPHQL_URL => Some("https://blog.example.com/graphql".to_string()),
            ENV_PAGE_SIZE => Some("6".to_string()),
            ENV_SLUG_BATCH_SIZE => Some("250".to_string()),
            ENV_TIMEOUT_SECS => Some("5".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.page_size, 6);
        assert_eq!(config.slug_batch_size, 250);
        assert_eq!(config.max_slug_pages, 1000);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = GatewayConfig::from_lookup(|var| match var {
            ENV_GRAPHQL_URL => Some("https://blog.example.com/graphql".to_string()),
            ENV_PAGE_SIZE => Some("0".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GatewayConfig::new("https://blog.example.com/graphql")
            .unwrap()
            .with_page_size(3)
            .with_slug_batch_size(50)
            .with_max_slug_pages(10)
            .with_timeout(Duration::from_secs(1));

        assert_eq!(config.page_size, 3);
        assert_eq!(config.slug_batch_size, 50);
        assert_eq!(config.max_slug_pages, 10);
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
