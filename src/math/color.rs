//! 8-bit colors and their widened 16-bit accumulators

use crate::io::configuration::CHANNEL_WIDEN_FACTOR;
use image::Rgba;

/// Opaque RGB color with 8 bits per channel
///
/// Alpha is implicitly fully opaque; it takes no part in storage or comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color of an RGBA pixel, ignoring its alpha
    pub const fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self { r, g, b }
    }

    /// Fully opaque RGBA pixel of this color
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, u8::MAX])
    }

    /// Channels scaled to the 16-bit range (`v * 0x101`)
    pub const fn widen(self) -> WideColor {
        WideColor {
            r: self.r as u64 * CHANNEL_WIDEN_FACTOR as u64,
            g: self.g as u64 * CHANNEL_WIDEN_FACTOR as u64,
            b: self.b as u64 * CHANNEL_WIDEN_FACTOR as u64,
        }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Self::from_rgba(pixel)
    }
}

/// Wide-precision RGB used for sums and averages before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WideColor {
    /// Red channel in 16-bit scale
    pub r: u64,
    /// Green channel in 16-bit scale
    pub g: u64,
    /// Blue channel in 16-bit scale
    pub b: u64,
}

impl WideColor {
    /// Add another wide color channel-wise
    pub const fn accumulate(&mut self, other: Self) {
        self.r = self.r.saturating_add(other.r);
        self.g = self.g.saturating_add(other.g);
        self.b = self.b.saturating_add(other.b);
    }

    /// Channel-wise mean over `count` accumulated samples
    ///
    /// A zero count leaves the value unchanged.
    pub const fn mean(self, count: u32) -> Self {
        if count == 0 {
            return self;
        }
        Self {
            r: self.r / count as u64,
            g: self.g / count as u64,
            b: self.b / count as u64,
        }
    }

    /// Normalize back to 8 bits per channel, truncating
    pub const fn narrow(self) -> Color {
        Color {
            r: clamp_channel(self.r / CHANNEL_WIDEN_FACTOR as u64),
            g: clamp_channel(self.g / CHANNEL_WIDEN_FACTOR as u64),
            b: clamp_channel(self.b / CHANNEL_WIDEN_FACTOR as u64),
        }
    }
}

const fn clamp_channel(value: u64) -> u8 {
    if value > u8::MAX as u64 {
        u8::MAX
    } else {
        value as u8
    }
}
