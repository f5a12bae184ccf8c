//! ASCII Renderer - image to ASCII art converter
//!
//! Maps pixel brightness onto a density-ordered character palette. An image
//! is optionally normalized to grayscale, then sampled at a chosen density
//! and turned into a block of text.
//!
//! # Example
//! ```
//! use ascii_rendr::{process_image, AsciiConfig, BuiltinPalette};
//! use image::{Rgba, RgbaImage};
//!
//! let input = RgbaImage::from_fn(2, 1, |x, _| {
//!     if x == 0 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
//! });
//! let config = AsciiConfig::default().with_palette(BuiltinPalette::Short);
//! let art = process_image(&input, &config).unwrap();
//! assert_eq!(art, "@   \n");
//! ```

pub mod ascii;
pub mod buffer;
pub mod config;
pub mod error;
pub mod grayscale;
pub mod palette;
pub mod processor;

// Re-export main types for convenience
pub use ascii::{render, render_text, SCALE_ADVISORY};
pub use config::{AsciiConfig, GrayscaleOptions};
pub use error::RenderError;
pub use grayscale::{grayscale, grayscale_in_place};
pub use palette::BuiltinPalette;
pub use processor::{process_image, process_image_in_place, process_raw};
