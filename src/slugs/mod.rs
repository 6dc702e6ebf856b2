//! Slug enumeration module
//!
//! Drives the slug-only projection page by page to produce the complete
//! slug list used for static path generation. All-or-nothing: the first
//! failing page aborts the whole enumeration.

mod enumerator;

pub use enumerator::{SlugEnumerator, SlugPageFetcher};
