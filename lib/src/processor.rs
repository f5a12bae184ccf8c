use crate::ascii::render;
use crate::buffer::from_raw;
use crate::config::AsciiConfig;
use crate::error::RenderError;
use crate::grayscale::{grayscale, grayscale_in_place};
use image::RgbaImage;
use log::debug;
use std::borrow::Cow;

/// Converts an image to ASCII art
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Normalize a copy of `input` to grayscale (if `config.grayscale` is set)
/// 3. Sample at the configured scale and map brightness onto the palette
///
/// # Arguments
/// * `input` - The input RGBA image; never modified
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The ASCII art, one line per sampled row
pub fn process_image(input: &RgbaImage, config: &AsciiConfig) -> Result<String, RenderError> {
    config.validate()?;

    let working_image = match &config.grayscale {
        Some(options) => Cow::Owned(grayscale(input, options)),
        None => Cow::Borrowed(input),
    };

    render(&working_image, config.scale, config.palette.glyphs())
}

/// Converts an image to ASCII art, normalizing it in place
///
/// Same as [`process_image`] but skips the copy: when `config.grayscale` is
/// set, `input` is left holding its grayscale version.
pub fn process_image_in_place(
    input: &mut RgbaImage,
    config: &AsciiConfig,
) -> Result<String, RenderError> {
    config.validate()?;

    if let Some(options) = &config.grayscale {
        grayscale_in_place(input, options);
    }

    render(input, config.scale, config.palette.glyphs())
}

/// Converts raw row-major RGBA bytes to ASCII art
///
/// The bytes are taken by value and normalized in place.
pub fn process_raw(
    width: u32,
    height: u32,
    data: Vec<u8>,
    config: &AsciiConfig,
) -> Result<String, RenderError> {
    debug!("process_raw {}x{} ({} bytes)", width, height, data.len());
    let mut image = from_raw(width, height, data)?;
    process_image_in_place(&mut image, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrayscaleOptions;
    use crate::palette::BuiltinPalette;
    use image::Rgba;

    fn short_config() -> AsciiConfig {
        AsciiConfig::default().with_palette(BuiltinPalette::Short)
    }

    #[test]
    fn test_process_transparent_renders_as_background() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        assert_eq!(process_image(&img, &short_config()).unwrap(), "@   \n");
    }

    #[test]
    fn test_process_without_grayscale_reads_red() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let config = short_config().without_grayscale();
        assert_eq!(process_image(&img, &config).unwrap(), "  \n");

        // with normalization the mean is 85
        let config = short_config();
        assert_eq!(process_image(&img, &config).unwrap(), "* \n");
    }

    #[test]
    fn test_process_leaves_input_untouched() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let before = img.clone();
        process_image(&img, &AsciiConfig::default()).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_process_in_place_normalizes_input() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let art = process_image_in_place(&mut img, &AsciiConfig::default()).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgba([20, 20, 20, 255]));
        assert_eq!(art, process_image(&img, &AsciiConfig::default()).unwrap());
    }

    #[test]
    fn test_process_invalid_config() {
        let img = RgbaImage::new(4, 4);
        let config = AsciiConfig::default().with_scale(f32::NAN);
        assert!(matches!(
            process_image(&img, &config),
            Err(RenderError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_process_raw() {
        let data = vec![0, 0, 0, 255, 255, 255, 255, 255];
        let art = process_raw(2, 1, data, &short_config()).unwrap();
        assert_eq!(art, "@   \n");
    }

    #[test]
    fn test_process_raw_bad_length() {
        let result = process_raw(2, 2, vec![0; 12], &AsciiConfig::default());
        assert!(matches!(result, Err(RenderError::InvalidBuffer { .. })));
    }

    #[test]
    fn test_process_custom_threshold() {
        // mean 200 only snaps once the threshold passes 55
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 200, 200, 255]));
        let config = short_config().with_grayscale(GrayscaleOptions {
            ignore_threshold: 60,
            ..GrayscaleOptions::default()
        });
        assert_eq!(process_image(&img, &config).unwrap(), "  \n");
    }
}
