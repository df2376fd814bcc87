//! Writes a finished render to disk.  The format follows the file
//! extension: `.png` for PNG, `.pnm`/`.pam` for the netpbm family.

use image::ColorType;
use std::path::Path;
use tracing::info;

use crate::errors::OutputError;
use crate::pixels::PixelBuffer;

/// Encodes `pixels` as a grayscale-with-alpha image at `path`.
pub fn write_image(path: &Path, pixels: &PixelBuffer) -> Result<(), OutputError> {
    image::save_buffer(
        path,
        pixels.as_raw(),
        pixels.width(),
        pixels.height(),
        ColorType::La8,
    )
    .map_err(|cause| OutputError::Write {
        path: path.display().to_string(),
        cause,
    })?;
    info!(path = %path.display(), "image written");
    Ok(())
}
