use crate::config::GrayscaleOptions;
use image::RgbaImage;
use log::debug;
use rayon::prelude::*;

/// Convert an RGBA image to grayscale by plain channel averaging
///
/// Returns a new image; `img` is left untouched. See [`grayscale_in_place`]
/// for the per-pixel rules.
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `options` - Transparency / near-white handling
///
/// # Returns
/// RGBA image with R = G = B on every pixel and the original alpha
pub fn grayscale(img: &RgbaImage, options: &GrayscaleOptions) -> RgbaImage {
    let mut output = img.clone();
    grayscale_in_place(&mut output, options);
    output
}

/// Convert an RGBA image to grayscale, overwriting its color channels
///
/// For every pixel, with `t = options.ignore_threshold`:
/// - alpha below `t` (and `ignore_transparent` set) becomes white
/// - otherwise a channel mean above `255 - t` (and `ignore_white` set) becomes white
/// - otherwise R, G and B all take the channel mean, rounded to nearest
///
/// Alpha is never modified. Applying this twice with the same options gives
/// the same result as applying it once.
///
/// # Returns
/// The same image, for chaining
pub fn grayscale_in_place<'a>(
    img: &'a mut RgbaImage,
    options: &GrayscaleOptions,
) -> &'a mut RgbaImage {
    debug!(
        "grayscale {}x{} (transparent: {}, white: {}, threshold: {})",
        img.width(),
        img.height(),
        options.ignore_transparent,
        options.ignore_white,
        options.ignore_threshold
    );

    let options = *options;
    img.par_chunks_exact_mut(4).for_each(|pixel| {
        let avg = normalized_value(pixel[0], pixel[1], pixel[2], pixel[3], &options);
        pixel[0] = avg;
        pixel[1] = avg;
        pixel[2] = avg;
    });

    img
}

/// Gray level for a single RGBA pixel
pub fn normalized_value(r: u8, g: u8, b: u8, a: u8, options: &GrayscaleOptions) -> u8 {
    let threshold = u16::from(options.ignore_threshold);

    // treat transparency as white
    if options.ignore_transparent && u16::from(a) < threshold {
        return 255;
    }

    let sum = u16::from(r) + u16::from(g) + u16::from(b);

    // mean > 255 - t, compared exactly on the sum
    if options.ignore_white && sum > 3 * (255 - threshold) {
        return 255;
    }

    // sum / 3 never lands on .5, so this is round-to-nearest
    ((sum + 1) / 3) as u8
}
