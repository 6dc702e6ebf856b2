//! Wire shapes for the upstream WPGraphQL responses
//!
//! WPGraphQL nests single references inside `{ node: ... }` wrappers and
//! connections inside `{ nodes: [...] }`. These structs decode that shape;
//! conversion into the flat crate types happens in `From` impls so the
//! rest of the gateway never sees the nesting.

use crate::types::{Author, FeaturedImage, Post};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// `data` shape for the posts listing query
#[derive(Debug, Deserialize)]
pub struct PostsData {
    pub posts: PostConnection,
}

/// A posts connection with the list projection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConnection {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<PostNode>,
}

/// `data` shape for the slug projection query
#[derive(Debug, Deserialize)]
pub struct SlugsData {
    pub posts: SlugConnection,
}

/// A posts connection carrying only slugs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugConnection {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<SlugNode>,
}

/// `data` shape for the point lookup query
#[derive(Debug, Deserialize)]
pub struct PostBySlugData {
    pub post: Option<PostNode>,
}

/// Relay-style page info
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// One post node as the upstream returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostNode {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub featured_image: Option<NodeWrapper<ImageNode>>,
    #[serde(default)]
    pub categories: Option<CategoryConnection>,
    #[serde(default)]
    pub author: Option<NodeWrapper<AuthorNode>>,
}

/// One slug-only node
#[derive(Debug, Deserialize)]
pub struct SlugNode {
    pub slug: String,
}

/// WPGraphQL's `{ node: ... }` wrapper around single references
#[derive(Debug, Deserialize)]
pub struct NodeWrapper<T> {
    #[serde(default)]
    pub node: Option<T>,
}

/// Featured image node
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub source_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Category connection, name projection only
#[derive(Debug, Deserialize)]
pub struct CategoryConnection {
    #[serde(default)]
    pub nodes: Vec<CategoryNode>,
}

/// Category node
#[derive(Debug, Deserialize)]
pub struct CategoryNode {
    pub name: String,
}

/// Author node
#[derive(Debug, Default, Deserialize)]
pub struct AuthorNode {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<Avatar>,
}

/// Author avatar
#[derive(Debug, Deserialize)]
pub struct Avatar {
    #[serde(default)]
    pub url: Option<String>,
}

impl From<PostNode> for Post {
    fn from(node: PostNode) -> Self {
        Post {
            id: node.id,
            slug: node.slug,
            title: node.title,
            date: node.date,
            excerpt: node.excerpt,
            content: node.content,
            featured_image: node.featured_image.and_then(|w| w.node).map(|img| FeaturedImage {
                source_url: img.source_url,
                alt_text: img.alt_text,
            }),
            categories: node
                .categories
                .map(|c| c.nodes.into_iter().map(|n| n.name).collect())
                .unwrap_or_default(),
            author: node.author.and_then(|w| w.node).map(|a| Author {
                name: a.name,
                avatar_url: a.avatar.and_then(|av| av.url),
            }),
        }
    }
}
