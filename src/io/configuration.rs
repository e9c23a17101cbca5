//! Mosaic constants and runtime configuration defaults

// Sampling
/// Number of random pixels drawn to estimate a region's average color
pub const SAMPLE_COUNT: u32 = 30;

/// Factor between 8-bit and 16-bit channel scales (65535 / 255)
pub const CHANNEL_WIDEN_FACTOR: u32 = 0x101;

// Default values for configurable parameters
/// Directory scanned for thumbnails when none is given
pub const DEFAULT_THUMBNAILS_DIR: &str = ".";

/// Edge length in pixels of each square cell and tile
pub const DEFAULT_THUMBNAIL_EDGE_SIZE: u32 = 30;

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// File the mosaic is written to, relative to the working directory
pub const OUTPUT_FILE_NAME: &str = "mosaic.jpg";

/// JPEG encoder quality for the output (1-100)
pub const JPEG_QUALITY: u8 = 100;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
