//! Built-in character palettes
//!
//! Every palette is ordered from the visually densest glyph (index 0) to the
//! sparsest (last index). Dark pixels pick glyphs near the front, bright
//! pixels glyphs near the back. Callers may pass any `&[char]` of their own
//! instead; ordering is never checked.

use crate::error::RenderError;
use std::fmt;
use std::str::FromStr;

/// The classic 70-glyph gradient, ending in a space
pub const STANDARD: [char; 70] = [
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a',
    'h', 'k', 'b', 'd', 'p', 'q', 'w', 'm', 'Z', 'O', '0', 'Q',
    'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x',
    'r', 'j', 'f', 't', '/', '\\', '|', '(', ')', '1', '{', '}',
    '[', ']', '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l',
    'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// A 94-glyph gradient with a different visual progression
///
/// Its sparsest glyph is a backtick rather than a space, so white areas
/// stay faintly textured.
pub const ALTERNATE: [char; 94] = [
    'M', 'Q', 'W', '#', 'B', 'N', 'q', 'p', 'H', 'E', 'R', 'm',
    'K', 'd', 'g', 'A', 'G', 'b', 'X', '8', '@', 'S', 'D', 'O',
    '$', 'P', 'U', 'k', 'w', 'Z', 'y', 'F', '6', '9', 'h', 'e',
    'T', '0', 'a', '&', 'x', 'V', '%', 'C', 's', '4', 'f', 'Y',
    '5', '2', 'L', 'o', 'n', 'z', '3', 'u', 'c', 'J', 'j', 'v',
    'I', 't', 'r', '}', '{', 'l', 'i', '?', '1', ']', '[', '7',
    '<', '>', '=', ')', '(', '+', '*', '|', '!', '/', '\\', ';',
    ':', '-', ',', '"', '_', '~', '^', '.', '\'', '`',
];

/// Coarse 10-level gradient
pub const SHORT: [char; 10] = [
    '@', // 0: densest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: sparsest
];

/// Block shading: dark, medium, light
pub const SHADING: [char; 3] = ['▓', '▒', '░'];

/// Named handle for one of the built-in palettes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuiltinPalette {
    #[default]
    Standard,
    Alternate,
    Short,
    Shading,
}

impl BuiltinPalette {
    /// All built-in palettes, in catalog order
    pub const ALL: [BuiltinPalette; 4] = [
        BuiltinPalette::Standard,
        BuiltinPalette::Alternate,
        BuiltinPalette::Short,
        BuiltinPalette::Shading,
    ];

    /// The glyphs of this palette, densest first
    pub fn glyphs(self) -> &'static [char] {
        match self {
            BuiltinPalette::Standard => &STANDARD,
            BuiltinPalette::Alternate => &ALTERNATE,
            BuiltinPalette::Short => &SHORT,
            BuiltinPalette::Shading => &SHADING,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinPalette::Standard => "standard",
            BuiltinPalette::Alternate => "alternate",
            BuiltinPalette::Short => "short",
            BuiltinPalette::Shading => "shading",
        }
    }
}

impl fmt::Display for BuiltinPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinPalette {
    type Err = RenderError;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|palette| palette.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RenderError::UnknownPalette(s.to_string()))
    }
}

impl AsRef<[char]> for BuiltinPalette {
    fn as_ref(&self) -> &[char] {
        self.glyphs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lengths() {
        assert_eq!(BuiltinPalette::Standard.glyphs().len(), 70);
        assert_eq!(BuiltinPalette::Alternate.glyphs().len(), 94);
        assert_eq!(BuiltinPalette::Short.glyphs().len(), 10);
        assert_eq!(BuiltinPalette::Shading.glyphs().len(), 3);
    }

    #[test]
    fn test_short_palette_ends() {
        assert_eq!(SHORT[0], '@');
        assert_eq!(SHORT[9], ' ');
    }

    #[test]
    fn test_standard_palette_ends() {
        assert_eq!(STANDARD[0], '$');
        assert_eq!(STANDARD[69], ' ');
    }

    #[test]
    fn test_palettes_have_no_duplicates() {
        for palette in BuiltinPalette::ALL {
            let glyphs = palette.glyphs();
            for (i, a) in glyphs.iter().enumerate() {
                assert!(
                    !glyphs[i + 1..].contains(a),
                    "{palette} repeats glyph {a:?}"
                );
            }
        }
    }

    #[test]
    fn test_from_str_roundtrips_names() {
        for palette in BuiltinPalette::ALL {
            assert_eq!(palette.name().parse::<BuiltinPalette>(), Ok(palette));
        }
        assert_eq!("SHADING".parse::<BuiltinPalette>(), Ok(BuiltinPalette::Shading));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            "braille".parse::<BuiltinPalette>(),
            Err(RenderError::UnknownPalette("braille".to_string()))
        );
    }
}
