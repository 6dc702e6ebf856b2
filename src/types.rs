//! Common types used throughout Presshead
//!
//! The data model mirrors the upstream WPGraphQL shapes after
//! normalization: a flat `Post`, and cursor-paged results for the
//! listing and slug projections.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Post
// ============================================================================

/// A single blog post.
///
/// `id` is opaque and stable across pagination; `slug` is unique among
/// posts. `content` is only populated by the point lookup — list pages
/// carry the excerpt at most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque stable identifier
    pub id: String,

    /// URL-safe unique slug
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publish date as reported by the upstream (no timezone)
    #[serde(default)]
    pub date: Option<NaiveDateTime>,

    /// Short excerpt (HTML), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Full content (HTML); absent in list projections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Featured image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,

    /// Category names, zero or more
    #[serde(default)]
    pub categories: Vec<String>,

    /// Author reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

/// Featured image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImage {
    /// Source URL
    pub source_url: String,

    /// Alt text
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Post author reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Display name
    pub name: String,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Page Results
// ============================================================================

/// One normalized page of posts.
///
/// `end_cursor` is an opaque continuation token; `None` means "start from
/// the beginning" when used as a request cursor. When `has_next_page` is
/// false the cursor carries no further meaning and must not be replayed.
/// An empty page with `has_next_page = true` is unusual but valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Posts in upstream order
    pub items: Vec<Post>,

    /// Cursor of the last item, for resuming
    pub end_cursor: Option<String>,

    /// Whether another page can be requested
    pub has_next_page: bool,
}

impl PageResult {
    /// An empty, exhausted page
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            end_cursor: None,
            has_next_page: false,
        }
    }
}

/// One page of the slug-only projection used for static path generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugPage {
    /// Slugs in upstream order
    pub slugs: Vec<String>,

    /// Cursor of the last item, for resuming
    pub end_cursor: Option<String>,

    /// Whether another page can be requested
    pub has_next_page: bool,
}
