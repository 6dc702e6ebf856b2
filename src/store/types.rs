//! Pagination state snapshot types

use crate::types::Post;
use serde::Serialize;

/// The observable state of one browsing session's post list.
///
/// `items` ordering matches arrival order of pages, each page's items
/// appended in the order returned. `end_cursor` is the cursor of the last
/// page fetched; `is_loading` is true exactly while a fetch is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Accumulated posts, append-only within a session
    pub items: Vec<Post>,

    /// Cursor of the last fetched page
    pub end_cursor: Option<String>,

    /// Whether another page can be appended
    pub has_next_page: bool,

    /// Whether an append is currently in flight
    pub is_loading: bool,
}

impl PaginationState {
    /// Fresh session state: no items, start-of-listing cursor, more
    /// pages assumed available
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            end_cursor: None,
            has_next_page: true,
            is_loading: false,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}
