//! Color representation and color-space arithmetic

/// 8-bit colors and widened accumulators
pub mod color;
/// Distance metric between colors
pub mod distance;

pub use color::{Color, WideColor};
