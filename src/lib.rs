//! Photo-mosaic construction from a directory of thumbnail images
//!
//! The source image is divided into square cells. Each cell's average color is
//! estimated by random sampling, the thumbnail with the nearest average color
//! is selected, scaled to the cell size and copied into the output canvas.

#![forbid(unsafe_code)]

/// Randomized color sampling of image regions
pub mod analysis;
/// Mosaic composition and tile placement
pub mod composition;
/// Input/output operations and error handling
pub mod io;
/// Thumbnail indexing and nearest-color matching
pub mod matching;
/// Color representation and distance metric
pub mod math;
/// Pixel regions and the mosaic cell grid
pub mod spatial;

pub use composition::MosaicComposer;
pub use io::error::{MosaicError, Result};
pub use matching::{ThumbnailEntry, ThumbnailIndex, best_match};
pub use math::Color;
