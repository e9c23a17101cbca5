//! Spatial data structures for mosaic layout
//!
//! This module contains spatial-related functionality including:
//! - Integer pixel regions and clipping
//! - The cell partition of the source image

/// Cell grid layout over the source image
pub mod grid;
/// Axis-aligned pixel rectangles
pub mod region;

pub use grid::{Cell, CellGrid};
pub use region::Region;
