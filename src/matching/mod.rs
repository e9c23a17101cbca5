//! Thumbnail indexing and nearest-color selection

/// Thumbnail loading and color precomputation
pub mod index;
/// Nearest-color thumbnail lookup
pub mod matcher;

pub use index::{ThumbnailEntry, ThumbnailIndex};
pub use matcher::best_match;
