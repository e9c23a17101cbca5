//! Partition of an image into square mosaic cells
//!
//! Cells are laid out from the top-left corner with a fixed edge size. When
//! the image dimensions are not multiples of the edge, the last row and
//! column hold partial cells whose nominal rectangle extends past the image.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::region::Region;

/// A single mosaic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column index within the grid
    pub col: u32,
    /// Row index within the grid
    pub row: u32,
    /// Nominal `edge x edge` rectangle, may exceed the image bounds
    pub bounds: Region,
}

impl Cell {
    /// Top-left pixel of the cell
    pub const fn origin(&self) -> (u32, u32) {
        (self.bounds.min_x, self.bounds.min_y)
    }
}

/// Cell layout over a `width x height` image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    edge: u32,
}

impl CellGrid {
    /// Lay out cells of `edge` pixels over an image
    ///
    /// # Errors
    ///
    /// Returns an error if `edge` is zero
    pub fn new(width: u32, height: u32, edge: u32) -> Result<Self> {
        if edge == 0 {
            return Err(invalid_parameter(
                "thumbnail_edge_size",
                &edge,
                &"cell edge must be positive",
            ));
        }
        Ok(Self {
            width,
            height,
            edge,
        })
    }

    /// Number of cell columns, counting a trailing partial column
    pub const fn cols(&self) -> u32 {
        self.width.div_ceil(self.edge)
    }

    /// Number of cell rows, counting a trailing partial row
    pub const fn rows(&self) -> u32 {
        self.height.div_ceil(self.edge)
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.cols() as usize * self.rows() as usize
    }

    /// True when the image has no pixels to cover
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every cell lies fully inside the image
    pub const fn is_exact(&self) -> bool {
        self.width % self.edge == 0 && self.height % self.edge == 0
    }

    /// Iterate cells row by row, left to right
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let edge = self.edge;
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols()).map(move |col| Cell {
                col,
                row,
                bounds: Region::from_origin(
                    col.saturating_mul(edge),
                    row.saturating_mul(edge),
                    edge,
                    edge,
                ),
            })
        })
    }
}
