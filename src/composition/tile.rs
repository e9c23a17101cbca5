//! Tile scaling and placement onto the mosaic canvas
//!
//! A tile is the thumbnail scaled to a square of the cell edge. Cells on the
//! right and bottom borders only show part of that square, so tiles are
//! rendered as a window of the nominal scaled square and only the visible
//! pixels are ever allocated.

use image::RgbaImage;
use image::imageops;

/// Render the top-left `width x height` window of `thumbnail` scaled to `edge x edge`
///
/// Scaling is nearest-neighbor: each output pixel takes the thumbnail pixel
/// under its center. The window is clamped to the nominal square, and an
/// empty thumbnail yields a transparent window.
pub fn scale_window(thumbnail: &RgbaImage, edge: u32, width: u32, height: u32) -> RgbaImage {
    let width = width.min(edge);
    let height = height.min(edge);
    let (thumb_width, thumb_height) = thumbnail.dimensions();
    if thumb_width == 0 || thumb_height == 0 {
        return RgbaImage::new(width, height);
    }

    RgbaImage::from_fn(width, height, |x, y| {
        *thumbnail.get_pixel(
            nearest_source(x, edge, thumb_width),
            nearest_source(y, edge, thumb_height),
        )
    })
}

/// Copy `tile` onto `canvas` with its top-left corner at `(x, y)`
///
/// Destination pixels are overwritten unconditionally. Tile pixels that fall
/// outside the canvas are dropped.
pub fn place(canvas: &mut RgbaImage, tile: &RgbaImage, x: u32, y: u32) {
    imageops::replace(canvas, tile, i64::from(x), i64::from(y));
}

// Source coordinate whose span contains the center of `target` in a
// `target_len`-pixel axis mapped onto `source_len` pixels
fn nearest_source(target: u32, target_len: u32, source_len: u32) -> u32 {
    let scaled = (2 * u64::from(target) + 1) * u64::from(source_len) / (2 * u64::from(target_len));
    scaled.min(u64::from(source_len) - 1) as u32
}
