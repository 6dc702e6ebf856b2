//! Tests for the post fetch client and resolver

use super::*;
use crate::error::Error;
use crate::graphql::GraphqlClient;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PostClient {
    PostClient::new(GraphqlClient::new(
        format!("{}/graphql", server.uri()),
        Duration::from_secs(5),
    ))
}

fn page_body(slugs: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> serde_json::Value {
    let nodes: Vec<_> = slugs
        .iter()
        .enumerate()
        .map(|(i, slug)| {
            json!({
                "id": format!("cG9zdDp{i}"),
                "slug": slug,
                "title": format!("Post {slug}"),
                "date": "2024-01-15T08:00:00",
                "excerpt": "<p>...</p>",
                "featuredImage": null,
                "categories": { "nodes": [] },
                "author": { "node": { "name": "Alice" } }
            })
        })
        .collect();

    json!({
        "data": {
            "posts": {
                "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next_page },
                "nodes": nodes
            }
        }
    })
}

// ============================================================================
// fetch_page
// ============================================================================

#[tokio::test]
async fn test_fetch_page_normalizes_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "first": 2, "after": null }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["first", "second"], Some("YXJyYXk6MQ=="), true)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch_page(2, None).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].slug, "first");
    assert_eq!(page.items[1].slug, "second");
    assert_eq!(page.end_cursor.as_deref(), Some("YXJyYXk6MQ=="));
    assert!(page.has_next_page);
    assert_eq!(page.items[0].author.as_ref().unwrap().name, "Alice");
}

#[tokio::test]
async fn test_fetch_page_rejects_zero_page_size_before_any_call() {
    let mock_server = MockServer::start().await;

    // No mock mounted: a network call would fail loudly in a different way
    let client = client_for(&mock_server);
    let err = client.fetch_page(0, None).await.unwrap_err();

    assert!(matches!(err, Error::InvalidPageSize { got: 0 }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_page_passes_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "first": 5, "after": "YXJyYXk6NQ==" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["sixth"], None, false)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch_page(5, Some("YXJyYXk6NQ==")).await.unwrap();

    assert!(!page.has_next_page);
}

#[tokio::test]
async fn test_fetch_page_missing_page_info_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "posts": { "nodes": [] } }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_page(10, None).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_fetch_page_empty_with_has_next_page_is_valid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(&[], Some("YXJyYXk6MA=="), true)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch_page(10, None).await.unwrap();

    assert!(page.items.is_empty());
    assert!(page.has_next_page);
    assert_eq!(page.end_cursor.as_deref(), Some("YXJyYXk6MA=="));
}

// ============================================================================
// fetch_slug_page
// ============================================================================

#[tokio::test]
async fn test_fetch_slug_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "posts": {
                    "pageInfo": { "endCursor": "cDE=", "hasNextPage": true },
                    "nodes": [ { "slug": "a" }, { "slug": "b" } ]
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch_slug_page(100, None).await.unwrap();

    assert_eq!(page.slugs, vec!["a", "b"]);
    assert_eq!(page.end_cursor.as_deref(), Some("cDE="));
    assert!(page.has_next_page);
}

// ============================================================================
// resolve_by_slug
// ============================================================================

#[tokio::test]
async fn test_resolve_by_slug_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "slug": "hello-world" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "post": {
                    "id": "cG9zdDox",
                    "slug": "hello-world",
                    "title": "Hello World",
                    "date": "2024-01-15T08:00:00",
                    "content": "<p>Full body.</p>",
                    "categories": { "nodes": [ { "name": "news" } ] },
                    "author": { "node": { "name": "Alice" } }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let post = client.resolve_by_slug("hello-world").await.unwrap().unwrap();

    assert_eq!(post.title, "Hello World");
    assert_eq!(post.content.as_deref(), Some("<p>Full body.</p>"));
    assert_eq!(post.categories, vec!["news"]);
}

#[tokio::test]
async fn test_resolve_by_slug_missing_is_none_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "post": null }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.resolve_by_slug("missing-slug").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_resolve_by_slug_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.resolve_by_slug("hello-world").await.unwrap_err();

    assert!(err.is_upstream_failure());
}

#[tokio::test]
async fn test_resolve_by_slug_rejects_empty_slug() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);
    let err = client.resolve_by_slug("").await.unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
