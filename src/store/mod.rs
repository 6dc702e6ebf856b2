//! Pagination store module
//!
//! Session-scoped incremental list state for "load more" browsing. One
//! store per browsing session; items grow monotonically across appended
//! pages and the whole thing is dropped with the session, never persisted.

mod manager;
mod types;

pub use manager::PaginationStore;
pub use types::PaginationState;
