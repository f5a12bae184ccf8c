/// Basic example: Convert a simple test image to ASCII art
///
/// Builds a gradient with a dark ring in memory and prints it with every
/// built-in palette. Run with `RUST_LOG=debug` to see render details.
use ascii_rendr::{AsciiConfig, BuiltinPalette, process_image};
use image::{Rgba, RgbaImage};

fn main() {
    env_logger::init();

    println!("ASCII Renderer - Basic Example");
    println!("==============================\n");

    let width = 64;
    let height = 32;

    // Horizontal gradient, transparent in the bottom-right corner
    let mut img = RgbaImage::from_fn(width, height, |x, y| {
        let gray = (x * 255 / (width - 1)) as u8;
        let alpha = if x > 56 && y > 26 { 0 } else { 255 };
        Rgba([gray, gray, gray, alpha])
    });

    // Dark ring in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 10.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = (y as f32 - center_y) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();

            if (dist - radius).abs() < 2.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    for palette in BuiltinPalette::ALL {
        let config = AsciiConfig::default().with_palette(palette).with_scale(0.9);

        match process_image(&img, &config) {
            Ok(art) => {
                println!("{} (scale {}):", palette, config.scale);
                println!("{art}");
            }
            Err(err) => eprintln!("{palette}: {err}"),
        }
    }
}
