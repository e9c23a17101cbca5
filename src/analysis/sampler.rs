//! Randomized estimate of a region's average color
//!
//! Rather than visiting every pixel, a fixed number of pixels are drawn
//! uniformly at random from the region (with replacement) and averaged in
//! 16-bit channel scale before narrowing back to 8 bits.

use crate::io::configuration::SAMPLE_COUNT;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::math::color::{Color, WideColor};
use crate::spatial::region::Region;
use image::{GenericImageView, Rgba};
use rand::Rng;

/// Estimate the average color of `region` using [`SAMPLE_COUNT`] samples
///
/// # Errors
///
/// Returns an error if:
/// - The region has zero width or height
/// - The region extends past the image bounds
pub fn average_color<I, R>(image: &I, region: Region, rng: &mut R) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
    R: Rng + ?Sized,
{
    average_color_with_samples(image, region, SAMPLE_COUNT, rng)
}

/// Estimate the average color of an entire image
///
/// # Errors
///
/// Returns an error if the image has zero width or height
pub fn average_image_color<I, R>(image: &I, rng: &mut R) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
    R: Rng + ?Sized,
{
    let (width, height) = image.dimensions();
    average_color(image, Region::of_size(width, height), rng)
}

/// Estimate the average color of `region` from `samples` random pixels
///
/// # Errors
///
/// Returns an error if:
/// - `samples` is zero
/// - The region has zero width or height
/// - The region extends past the image bounds
pub fn average_color_with_samples<I, R>(
    image: &I,
    region: Region,
    samples: u32,
    rng: &mut R,
) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
    R: Rng + ?Sized,
{
    if samples == 0 {
        return Err(invalid_parameter(
            "samples",
            &samples,
            &"at least one sample is required",
        ));
    }
    if region.is_empty() {
        return Err(MosaicError::InvalidRegion { region });
    }
    let (width, height) = image.dimensions();
    if !region.fits_within(width, height) {
        return Err(MosaicError::RegionOutOfBounds {
            region,
            width,
            height,
        });
    }

    let mut sum = WideColor::default();
    for _ in 0..samples {
        let x = rng.random_range(region.min_x..region.max_x);
        let y = rng.random_range(region.min_y..region.max_y);
        sum.accumulate(Color::from_rgba(image.get_pixel(x, y)).widen());
    }

    Ok(sum.mean(samples).narrow())
}
