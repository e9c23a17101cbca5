//! JPEG decoding of sources and thumbnails, and JPEG export of the mosaic

use crate::io::error::{MosaicError, Result, file_system_error};
use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Decode a JPEG file into an RGBA buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contents are not a decodable JPEG image
pub fn load_jpeg(path: &Path) -> Result<RgbaImage> {
    let file = File::open(path).map_err(|e| file_system_error(path, "open", e))?;
    let decoded = image::load(BufReader::new(file), ImageFormat::Jpeg).map_err(|e| {
        MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    Ok(decoded.to_rgba8())
}

/// Encode the mosaic as a JPEG file at the given quality
///
/// Alpha is dropped; every canvas pixel is written opaque.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - JPEG encoding fails
pub fn export_mosaic_as_jpeg(mosaic: &RgbaImage, output_path: &Path, quality: u8) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let file =
        File::create(output_path).map_err(|e| file_system_error(output_path, "create", e))?;
    let mut writer = BufWriter::new(file);

    let rgb: RgbImage = mosaic.convert();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    writer
        .flush()
        .map_err(|e| file_system_error(output_path, "write", e))?;

    Ok(())
}
