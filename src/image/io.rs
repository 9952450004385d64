//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into a `SampleBuffer`.
//! - `save_grayscale_u8`: write a `SampleBuffer` to disk; the format follows
//!   the file extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::SampleBuffer;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
///
/// An image that decodes to zero rows or columns is treated as a load
/// failure.
pub fn load_grayscale_image(path: &Path) -> Result<SampleBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    if rows == 0 || cols == 0 {
        return Err(format!("Decoded image {} is empty", path.display()));
    }
    SampleBuffer::new(rows, cols, img.into_raw())
}

/// Save an 8-bit grayscale buffer, creating parent directories.
pub fn save_grayscale_u8(buffer: &SampleBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.cols() as u32,
        buffer.rows() as u32,
        buffer.as_raw().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
