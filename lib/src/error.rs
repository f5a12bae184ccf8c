use thiserror::Error;

/// Errors reported by buffer construction, configuration and rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The palette has no glyphs at all.
    #[error("palette must contain at least one glyph")]
    EmptyPalette,

    /// A single glyph leaves no range to map brightness onto.
    #[error("palette with a single glyph cannot represent a brightness gradient")]
    DegeneratePalette,

    /// Brightness mapped to an index the palette does not have.
    #[error("glyph index {index} is outside a palette of {len} glyphs")]
    GlyphIndexOutOfRange { index: f64, len: usize },

    /// Scale is NaN.
    #[error("scale must be a number, got {0}")]
    InvalidScale(f32),

    /// Raw byte length does not match `width * height * 4`.
    #[error(
        "buffer of {actual} bytes does not match a {width}x{height} RGBA image ({expected} bytes expected)"
    )]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// `width * height * 4` does not fit in memory addressing.
    #[error("image dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// No built-in palette has this name.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),
}
