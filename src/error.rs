//! Error types for Presshead
//!
//! This module defines the error hierarchy for the whole gateway.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Note that a missing post is *not* an error: point lookups return
//! `Ok(None)` and callers render a not-found response.

use thiserror::Error;

/// The main error type for Presshead
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },

    #[error("Invalid page size: {got} (must be a positive integer)")]
    InvalidPageSize { got: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("Upstream returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    #[error("GraphQL reported errors: {messages}")]
    GraphqlReported { messages: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination protocol violation: {message}")]
    PaginationProtocolViolation { message: String },

    // ============================================================================
    // I/O & Generic Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar { var: var.into() }
    }

    /// Create an upstream-unavailable error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a GraphQL-reported error from the upstream `errors` array
    pub fn graphql_reported(messages: impl Into<String>) -> Self {
        Self::GraphqlReported {
            messages: messages.into(),
        }
    }

    /// Create a pagination protocol violation error
    pub fn protocol_violation(message: impl Into<String>) -> Self {
        Self::PaginationProtocolViolation {
            message: message.into(),
        }
    }

    /// Check if this error originates upstream (maps to 502 on the
    /// intermediary surface)
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Error::UpstreamUnavailable { .. }
                | Error::HttpStatus { .. }
                | Error::MalformedResponse { .. }
                | Error::GraphqlReported { .. }
                | Error::PaginationProtocolViolation { .. }
        )
    }

    /// Check if this error is a caller mistake (maps to 400)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::InvalidPageSize { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::UpstreamUnavailable {
            message: e.to_string(),
        }
    }
}

/// Result type alias for Presshead
pub type Result<T> = std::result::Result<T, Error>;
