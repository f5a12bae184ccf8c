use crate::error::RenderError;
use image::RgbaImage;
use log::{debug, warn};
use rayon::prelude::*;

/// Lowest accepted render scale (coarsest sampling)
pub const MIN_SCALE: f32 = 0.1;
/// Highest accepted render scale (every pixel sampled)
pub const MAX_SCALE: f32 = 1.0;
/// Sampling stride at `MAX_SCALE`
pub const MIN_STRIDE: u32 = 1;
/// Sampling stride at `MIN_SCALE`
pub const MAX_STRIDE: u32 = 10;

/// Message returned by [`render_text`] in place of art it could not produce
pub const SCALE_ADVISORY: &str = "This image can not be displayed at the current scale level. \
     Try adjusting it to fit a multiple of the width / height of the image.";

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Values outside the input range extrapolate. A degenerate input range
/// (`in_min == in_max`) divides by zero and yields a non-finite result.
pub fn scale(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Sampling stride for a render scale
///
/// `scale` is clamped to `[0.1, 1.0]` and mapped linearly onto
/// `[10, 1]`, then rounded:
///
/// | scale  | 1.0 | 0.9 | 0.8 | 0.7 | 0.6 | 0.5 | 0.4 | 0.3 | 0.2 | 0.1 |
/// |--------|-----|-----|-----|-----|-----|-----|-----|-----|-----|-----|
/// | stride |  1  |  2  |  3  |  4  |  5  |  6  |  7  |  8  |  9  | 10  |
///
/// # Errors
/// `InvalidScale` if `scale` is NaN.
pub fn stride_for_scale(scale_factor: f32) -> Result<u32, RenderError> {
    if scale_factor.is_nan() {
        return Err(RenderError::InvalidScale(scale_factor));
    }

    let clamped = f64::from(scale_factor.clamp(MIN_SCALE, MAX_SCALE));
    let stride = scale(
        clamped,
        f64::from(MIN_SCALE),
        f64::from(MAX_SCALE),
        f64::from(MAX_STRIDE),
        f64::from(MIN_STRIDE),
    )
    .round() as u32;

    Ok(stride.clamp(MIN_STRIDE, MAX_STRIDE))
}

/// Palette index for a brightness value
///
/// 0 maps to index 0 and 255 to `len - 1`, rounding to the nearest index in
/// between.
///
/// # Errors
/// `EmptyPalette` for `len == 0`, `GlyphIndexOutOfRange` if the mapped index
/// is non-finite or past the end.
pub fn glyph_index(brightness: u8, len: usize) -> Result<usize, RenderError> {
    if len == 0 {
        return Err(RenderError::EmptyPalette);
    }

    let last = (len - 1) as f64;
    let index = scale(f64::from(brightness), 0.0, 255.0, 0.0, last).round();

    if !index.is_finite() || index < 0.0 || index > last {
        return Err(RenderError::GlyphIndexOutOfRange { index, len });
    }

    Ok(index as usize)
}

fn validate_palette(palette: &[char]) -> Result<(), RenderError> {
    match palette.len() {
        0 => Err(RenderError::EmptyPalette),
        1 => Err(RenderError::DegeneratePalette),
        _ => Ok(()),
    }
}

/// Render one sampled image row
///
/// Every sampled pixel contributes its glyph plus a space; the row ends in `\n`.
fn render_row(img: &RgbaImage, y: u32, stride: u32, palette: &[char]) -> Result<String, RenderError> {
    let width = img.width();
    let mut row = String::with_capacity((width / stride + 2) as usize * 2);

    for x in (0..width).step_by(stride as usize) {
        let brightness = img.get_pixel(x, y)[0];
        let index = glyph_index(brightness, palette.len())?;
        let glyph = palette
            .get(index)
            .copied()
            .ok_or(RenderError::GlyphIndexOutOfRange {
                index: index as f64,
                len: palette.len(),
            })?;

        row.push(glyph);
        row.push(' ');
    }

    row.push('\n');
    Ok(row)
}

/// Render an image as ASCII art
///
/// Samples every `stride`-th row and column (see [`stride_for_scale`]) and
/// maps each sampled pixel's red channel onto `palette`. Normalize the image
/// first (see [`crate::grayscale::grayscale`]) if R, G and B may differ.
///
/// # Arguments
/// * `img` - Input image, ideally grayscale
/// * `scale_factor` - Render density, clamped to `[0.1, 1.0]`
/// * `palette` - Glyphs ordered densest first
///
/// # Returns
/// One line per sampled row, each glyph followed by a space, each line
/// terminated by `\n`
///
/// # Errors
/// `EmptyPalette` / `DegeneratePalette` for palettes shorter than two
/// glyphs, `InvalidScale` for a NaN scale.
pub fn render(img: &RgbaImage, scale_factor: f32, palette: &[char]) -> Result<String, RenderError> {
    validate_palette(palette)?;
    let stride = stride_for_scale(scale_factor)?;
    let (width, height) = img.dimensions();

    debug!(
        "render {}x{} at scale {} (stride {}) with {} glyphs",
        width,
        height,
        scale_factor,
        stride,
        palette.len()
    );

    let rows: Vec<u32> = (0..height).step_by(stride as usize).collect();

    // Rows are independent; collect keeps them in order
    let lines = rows
        .into_par_iter()
        .map(|y| render_row(img, y, stride, palette))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.concat())
}

/// Render an image as ASCII art, or explain why it could not be
///
/// Same as [`render`], but any failure is replaced by [`SCALE_ADVISORY`].
pub fn render_text(img: &RgbaImage, scale_factor: f32, palette: &[char]) -> String {
    match render(img, scale_factor, palette) {
        Ok(art) => art,
        Err(err) => {
            warn!("render failed: {err}");
            SCALE_ADVISORY.to_string()
        }
    }
}
