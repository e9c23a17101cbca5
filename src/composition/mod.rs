//! Mosaic composition from matched thumbnails

/// Per-cell sampling, matching and tile placement
pub mod composer;
/// Tile scaling and canvas placement
pub mod tile;

pub use composer::MosaicComposer;
