//! Thumbnail loading and per-thumbnail color precomputation
//!
//! The index is an ordered sequence of entries. Directory listings are sorted
//! by path before decoding so the same directory always produces the same
//! index order, which in turn fixes how ties are broken during matching.

use crate::analysis::sampler::average_image_color;
use crate::io::error::{Result, file_system_error};
use crate::io::image::load_jpeg;
use crate::math::color::Color;
use image::RgbaImage;
use rand::Rng;
use std::path::{Path, PathBuf};

/// A decoded thumbnail paired with its representative color
#[derive(Debug, Clone)]
pub struct ThumbnailEntry {
    /// Source file, empty for thumbnails built in memory
    pub path: PathBuf,
    /// Decoded thumbnail pixels
    pub image: RgbaImage,
    /// Average color over the thumbnail's full bounds
    pub color: Color,
}

/// Candidate tiles available to the mosaic
#[derive(Debug, Clone, Default)]
pub struct ThumbnailIndex {
    entries: Vec<ThumbnailEntry>,
    directory: Option<PathBuf>,
    skipped: usize,
}

impl ThumbnailIndex {
    /// Build an index from every decodable JPEG in `directory`
    ///
    /// Files that fail to decode are skipped and counted; they never abort
    /// the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed
    pub fn build<R: Rng + ?Sized>(directory: &Path, rng: &mut R) -> Result<Self> {
        Self::build_with_progress(directory, rng, |_, _| {})
    }

    /// Build an index, reporting `(files_visited, files_total)` after each file
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed
    pub fn build_with_progress<R, F>(directory: &Path, rng: &mut R, mut on_file: F) -> Result<Self>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, usize),
    {
        let files = list_files(directory)?;
        let total = files.len();

        let mut index = Self {
            entries: Vec::with_capacity(total),
            directory: Some(directory.to_path_buf()),
            skipped: 0,
        };

        for (visited, path) in files.into_iter().enumerate() {
            match load_jpeg(&path) {
                Ok(image) => index.insert(path, image, rng),
                Err(e) => {
                    log::warn!("Skipping thumbnail: {e}");
                    index.skipped += 1;
                }
            }
            on_file(visited + 1, total);
        }

        log::info!(
            "Indexed {} thumbnails from '{}' ({} skipped)",
            index.entries.len(),
            directory.display(),
            index.skipped
        );

        Ok(index)
    }

    /// Build an index from in-memory thumbnails, in the given order
    ///
    /// Images with zero width or height are skipped.
    pub fn from_images<R, I>(images: I, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = RgbaImage>,
    {
        let mut index = Self::default();
        for image in images {
            index.insert(PathBuf::new(), image, rng);
        }
        index
    }

    // Zero-area images have no color to sample and are skipped like undecodable files
    fn insert<R: Rng + ?Sized>(&mut self, path: PathBuf, image: RgbaImage, rng: &mut R) {
        match average_image_color(&image, rng) {
            Ok(color) => {
                log::debug!("Thumbnail '{}' average color {color:?}", path.display());
                self.entries.push(ThumbnailEntry { path, image, color });
            }
            Err(e) => {
                log::warn!("Skipping thumbnail '{}': {e}", path.display());
                self.skipped += 1;
            }
        }
    }

    /// Number of usable thumbnails
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no thumbnail is usable
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files or images that were skipped while building
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Directory the index was built from, if any
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// All entries in index order
    pub const fn entries(&self) -> &[ThumbnailEntry] {
        self.entries.as_slice()
    }

    /// Entry at `position` in index order
    pub fn get(&self, position: usize) -> Option<&ThumbnailEntry> {
        self.entries.get(position)
    }

    /// Iterate entries in index order
    pub fn iter(&self) -> std::slice::Iter<'_, ThumbnailEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ThumbnailIndex {
    type Item = &'a ThumbnailEntry;
    type IntoIter = std::slice::Iter<'a, ThumbnailEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Regular files only, sorted for a stable index order
fn list_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(directory).map_err(|e| file_system_error(directory, "read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(directory, "read directory entry", e))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
