//! GraphQL HTTP executor
//!
//! Wraps a reqwest `Client` and performs exactly one network call per
//! invocation. Classification:
//! - transport failure or non-success status → `UpstreamUnavailable` /
//!   `HttpStatus`
//! - unparseable body or missing `data` → `MalformedResponse`
//! - success status with a non-empty `errors` array → `GraphqlReported`

use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the upstream GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("presshead/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(&config.upstream_url, config.timeout)
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query document and return the response `data` field.
    ///
    /// A non-empty `errors` array fails the call even when the transport
    /// status was success.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream returned {} for {}", status.as_u16(), self.endpoint);
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::malformed(format!("response body is not JSON: {e}")))?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages = collect_error_messages(errors);
                warn!("Upstream reported GraphQL errors: {messages}");
                return Err(Error::graphql_reported(messages));
            }
        }

        match body.get("data") {
            Some(data) if !data.is_null() => {
                debug!("GraphQL query succeeded against {}", self.endpoint);
                Ok(data.clone())
            }
            _ => Err(Error::malformed("response has no data field")),
        }
    }
}

/// Join the `message` fields of a GraphQL errors array
fn collect_error_messages(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
        })
        .collect::<Vec<_>>()
        .join("; ")
}
