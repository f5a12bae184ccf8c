use crate::error::RenderError;
use crate::palette::BuiltinPalette;

/// Settings for grayscale normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayscaleOptions {
    /// Treat pixels with alpha below `ignore_threshold` as white, default true
    pub ignore_transparent: bool,
    /// Snap pixels whose mean is within `ignore_threshold` of 255 to white, default true
    pub ignore_white: bool,
    /// Proximity tolerance for both rules, default 16
    pub ignore_threshold: u8,
}

impl Default for GrayscaleOptions {
    fn default() -> Self {
        Self {
            ignore_transparent: true,
            ignore_white: true,
            ignore_threshold: 16,
        }
    }
}

impl GrayscaleOptions {
    /// Plain channel averaging with no snapping to white
    pub fn plain() -> Self {
        Self {
            ignore_transparent: false,
            ignore_white: false,
            ignore_threshold: 0,
        }
    }
}

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Render density, 0.1 (coarsest) to 1.0 (every pixel), default 1.0.
    /// Values outside that range are clamped at render time.
    pub scale: f32,

    /// Glyphs to map brightness onto, default Standard
    pub palette: BuiltinPalette,

    /// Normalize to grayscale before rendering; `None` renders the red channel as-is
    pub grayscale: Option<GrayscaleOptions>,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            palette: BuiltinPalette::Standard,
            grayscale: Some(GrayscaleOptions::default()),
        }
    }
}

impl AsciiConfig {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_palette(mut self, palette: BuiltinPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_grayscale(mut self, options: GrayscaleOptions) -> Self {
        self.grayscale = Some(options);
        self
    }

    /// Skip normalization; the caller guarantees R ≈ G ≈ B if fidelity matters
    pub fn without_grayscale(mut self) -> Self {
        self.grayscale = None;
        self
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.scale.is_nan() {
            return Err(RenderError::InvalidScale(self.scale));
        }
        Ok(())
    }
}
