//! Axis-aligned integer pixel rectangles

use std::fmt;

/// Half-open pixel rectangle `[min_x, max_x) x [min_y, max_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge (inclusive)
    pub min_x: u32,
    /// Top edge (inclusive)
    pub min_y: u32,
    /// Right edge (exclusive)
    pub max_x: u32,
    /// Bottom edge (exclusive)
    pub max_y: u32,
}

impl Region {
    /// Create a region from its corner coordinates
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a region from an origin and a size, saturating at `u32::MAX`
    pub const fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Region covering a whole image of the given dimensions
    pub const fn of_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Horizontal span, zero when the region is inverted
    pub const fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Vertical span, zero when the region is inverted
    pub const fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// True when the region contains no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// True when every pixel of the region lies inside a `width x height` image
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.max_x <= width && self.max_y <= height
    }

    /// Intersection with a `width x height` image, possibly empty
    pub fn clip_to(&self, width: u32, height: u32) -> Self {
        Self::new(
            self.min_x.min(width),
            self.min_y.min(height),
            self.max_x.min(width),
            self.max_y.min(height),
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
