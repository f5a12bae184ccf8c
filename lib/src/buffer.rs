//! Wrapping raw RGBA bytes as an image
//!
//! Decoded rasters usually arrive as a flat, row-major byte sequence with
//! four channels per pixel. `RgbaImage` is that exact layout, so wrapping is
//! free once the length has been checked.

use crate::error::RenderError;
use image::RgbaImage;

/// Number of bytes a `width × height` RGBA buffer must hold
///
/// Returns `None` if the product overflows `usize`.
pub fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
}

/// Wrap `data` as a `width × height` RGBA image without copying
///
/// # Errors
/// `InvalidBuffer` when `data.len() != width * height * 4`,
/// `DimensionsTooLarge` when that product overflows.
pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage, RenderError> {
    let expected =
        expected_len(width, height).ok_or(RenderError::DimensionsTooLarge { width, height })?;

    if data.len() != expected {
        return Err(RenderError::InvalidBuffer {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let actual = data.len();
    RgbaImage::from_raw(width, height, data).ok_or(RenderError::InvalidBuffer {
        width,
        height,
        expected,
        actual,
    })
}
