//! Cell-by-cell mosaic composition
//!
//! For every cell of the source grid the composer samples the cell's average
//! color, picks the nearest thumbnail, scales it to the cell size and writes
//! it into the output canvas. Cells are processed row by row on the calling
//! thread.
//!
//! Cells on the right and bottom edges may extend past the source. Their color
//! is sampled over the part that overlaps the source, and only the matching
//! window of the full-size tile is rendered and placed.

use crate::analysis::sampler::average_color;
use crate::composition::tile::{place, scale_window};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::matching::index::ThumbnailIndex;
use crate::matching::matcher::best_match;
use crate::spatial::grid::{Cell, CellGrid};
use image::{Rgba, RgbaImage};
use rand::Rng;

/// Canvas fill before any tile is written
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, u8::MAX]);

/// Builds mosaics with a fixed cell edge size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicComposer {
    cell_edge: u32,
}

impl MosaicComposer {
    /// Create a composer producing `cell_edge x cell_edge` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_edge` is zero
    pub fn new(cell_edge: u32) -> Result<Self> {
        if cell_edge == 0 {
            return Err(invalid_parameter(
                "thumbnail_edge_size",
                &cell_edge,
                &"cell edge must be positive",
            ));
        }
        Ok(Self { cell_edge })
    }

    /// Cell layout this composer uses for a `width x height` source
    ///
    /// # Errors
    ///
    /// Returns an error if the cell edge is invalid
    pub fn grid_for(&self, width: u32, height: u32) -> Result<CellGrid> {
        CellGrid::new(width, height, self.cell_edge)
    }

    /// Compose a mosaic of `source` from the thumbnails in `index`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The index holds no thumbnails
    /// - A cell's sampling region is rejected by the sampler
    pub fn compose<R: Rng + ?Sized>(
        &self,
        source: &RgbaImage,
        index: &ThumbnailIndex,
        rng: &mut R,
    ) -> Result<RgbaImage> {
        self.compose_with_progress(source, index, rng, |_, _| {})
    }

    /// Compose a mosaic, reporting `(cells_done, cells_total)` after each cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The index holds no thumbnails
    /// - A cell's sampling region is rejected by the sampler
    pub fn compose_with_progress<R, F>(
        &self,
        source: &RgbaImage,
        index: &ThumbnailIndex,
        rng: &mut R,
        mut on_cell: F,
    ) -> Result<RgbaImage>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, usize),
    {
        // Fail before allocating rather than leave a partially filled canvas
        if index.is_empty() {
            return Err(MosaicError::InsufficientThumbnails {
                directory: index.directory().map(std::path::Path::to_path_buf),
            });
        }

        let (width, height) = source.dimensions();
        let grid = self.grid_for(width, height)?;
        let total = grid.len();
        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);

        log::debug!(
            "Composing {}x{} cells of {}px over a {width}x{height} source ({})",
            grid.cols(),
            grid.rows(),
            self.cell_edge,
            if grid.is_exact() {
                "exact fit"
            } else {
                "partial edge cells"
            }
        );

        for (done, cell) in grid.cells().enumerate() {
            self.fill_cell(&mut canvas, source, index, cell, rng)?;
            on_cell(done + 1, total);
        }

        Ok(canvas)
    }

    fn fill_cell<R: Rng + ?Sized>(
        &self,
        canvas: &mut RgbaImage,
        source: &RgbaImage,
        index: &ThumbnailIndex,
        cell: Cell,
        rng: &mut R,
    ) -> Result<()> {
        let (width, height) = source.dimensions();
        let sample_region = cell.bounds.clip_to(width, height);

        let color = average_color(source, sample_region, rng)?;
        let entry = best_match(color, index)?;
        log::trace!(
            "Cell ({}, {}) color {color:?} -> '{}'",
            cell.col,
            cell.row,
            entry.path.display()
        );

        // Only the part of the tile inside the canvas is rendered
        let tile = scale_window(
            &entry.image,
            self.cell_edge,
            sample_region.width(),
            sample_region.height(),
        );
        let (x, y) = cell.origin();
        place(canvas, &tile, x, y);
        Ok(())
    }
}
