use crate::io::error::{MosaicError, Result};
use crate::matching::index::{ThumbnailEntry, ThumbnailIndex};
use crate::math::color::Color;
use crate::math::distance::euclidean;

/// Find the thumbnail whose color is closest to `target`
///
/// Scans every entry; on equal distances the entry earliest in index order
/// wins.
///
/// # Errors
///
/// Returns `InsufficientThumbnails` if the index is empty
pub fn best_match(target: Color, index: &ThumbnailIndex) -> Result<&ThumbnailEntry> {
    let mut best: Option<(&ThumbnailEntry, f64)> = None;

    for entry in index {
        let distance = euclidean(target, entry.color);
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((entry, distance)),
        }
    }

    best.map(|(entry, _)| entry)
        .ok_or_else(|| MosaicError::InsufficientThumbnails {
            directory: index.directory().map(std::path::Path::to_path_buf),
        })
}
