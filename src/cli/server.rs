//! HTTP server mode - the intermediary surface over the upstream source
//!
//! Routes:
//! - `GET /api/posts?first=N&after=CURSOR` - one page of posts
//! - `GET /api/posts/{slug}` - one post, or 404
//! - `GET /api/slugs` - every slug, as a JSON array
//! - `GET /health` - liveness probe
//!
//! Each request is served by an independent upstream fetch; there is no
//! server-side shared mutable state between requests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::posts::PostClient;
use crate::slugs::SlugEnumerator;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    client: Arc<PostClient>,
    config: GatewayConfig,
}

/// Query parameters for the posts listing
#[derive(Debug, Deserialize)]
struct ListQuery {
    /// Page size; defaults to the configured page size
    first: Option<u32>,
    /// Opaque resume cursor
    after: Option<String>,
}

/// Build the intermediary router for the given configuration
pub fn router(config: GatewayConfig) -> Router {
    let state = AppState {
        client: Arc::new(PostClient::from_config(&config)),
        config,
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(post_by_slug))
        .route("/api/slugs", get(all_slugs))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}

/// Serve the intermediary surface on the given port
pub async fn serve(config: GatewayConfig, port: u16) -> Result<()> {
    let app = router(config);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Presshead listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}

async fn list_posts(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let first = query.first.unwrap_or(state.config.page_size);

    match state.client.fetch_page(first, query.after.as_deref()).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn post_by_slug(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.client.resolve_by_slug(&slug).await {
        Ok(Some(post)) => Json(post).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("post '{slug}' not found") })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

async fn all_slugs(State(state): State<AppState>) -> Response {
    let enumerator = SlugEnumerator::new(
        Arc::clone(&state.client),
        state.config.slug_batch_size,
        state.config.max_slug_pages,
    );

    match enumerator.enumerate_all().await {
        Ok(slugs) => Json(slugs).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Map gateway errors onto the surface: caller mistakes are 400, anything
/// that went wrong upstream is 502
fn error_response(err: &Error) -> Response {
    let status = if err.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else if err.is_upstream_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
