//! 8-bit RGBA colors and the color string parser used by configuration.
//!
//! Accepted string forms:
//! - `#RRGGBB` (opaque)
//! - `#AARRGGBB` (alpha first)
//! - a small set of named colors (`"white"`, `"teal"`, `"lightgrey"`, ...), case-insensitive

use core::fmt;
use thiserror::Error;

/// An unpremultiplied 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

/// Errors produced by [`Rgba::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// A `#` color with a digit count other than 6 or 8.
    #[error("color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),

    /// A `#` color containing non-hex characters.
    #[error("color '{0}' contains non-hex digits")]
    InvalidHex(String),

    /// Not a `#` color and not a known color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("darkgray", 0x444444),
    ("darkgrey", 0x444444),
    ("gray", 0x888888),
    ("grey", 0x888888),
    ("lightgray", 0xCCCCCC),
    ("lightgrey", 0xCCCCCC),
    ("white", 0xFFFFFF),
    ("red", 0xFF0000),
    ("green", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("cyan", 0x00FFFF),
    ("magenta", 0xFF00FF),
    ("aqua", 0x00FFFF),
    ("fuchsia", 0xFF00FF),
    ("lime", 0x00FF00),
    ("maroon", 0x800000),
    ("navy", 0x000080),
    ("olive", 0x808000),
    ("purple", 0x800080),
    ("silver", 0xC0C0C0),
    ("teal", 0x008080),
];

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::from_rgb(0xFF, 0xFF, 0xFF);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Packed `0xAARRGGBB` value.
    pub const fn to_argb_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a color string. See the module docs for accepted forms.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = s.strip_prefix('#') {
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidHex(s.to_string()));
            }
            if digits.len() != 6 && digits.len() != 8 {
                return Err(ColorParseError::InvalidLength(s.to_string()));
            }
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
            return Ok(if digits.len() == 6 {
                Self::from_argb_u32(0xFF00_0000 | value)
            } else {
                Self::from_argb_u32(value)
            });
        }

        let lower = s.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, rgb)| Self::from_argb_u32(0xFF00_0000 | rgb))
            .ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale alpha by `opacity` (clamped to 0.0..=1.0).
    pub fn multiply_alpha(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * opacity).round() as u8)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08X}", self.to_argb_u32())
        }
    }
}

impl core::str::FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgba::parse("#03A9F4"), Ok(Rgba::from_rgb(0x03, 0xA9, 0xF4)));
        assert_eq!(Rgba::parse(" #e0e0e0 "), Ok(Rgba::from_rgb(0xE0, 0xE0, 0xE0)));
    }

    #[test]
    fn eight_digit_hex_is_alpha_first() {
        assert_eq!(
            Rgba::parse("#80FF0000"),
            Ok(Rgba::new(0xFF, 0x00, 0x00, 0x80))
        );
    }

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(Rgba::parse("Teal"), Ok(Rgba::from_rgb(0x00, 0x80, 0x80)));
        assert_eq!(Rgba::parse("LIGHTGREY"), Rgba::parse("lightgray"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Rgba::parse(""), Err(ColorParseError::Empty));
        assert!(matches!(
            Rgba::parse("#12345"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Rgba::parse("#FF00000000"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Rgba::parse("#+12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Rgba::parse("#GG0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Rgba::parse("chartreuse"),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn display_matches_parse_input() {
        assert_eq!(Rgba::from_rgb(0x03, 0xA9, 0xF4).to_string(), "#03A9F4");
        assert_eq!(Rgba::new(1, 2, 3, 0x4B).to_string(), "#4B010203");
    }

    #[test]
    fn multiply_alpha_clamps() {
        assert_eq!(Rgba::WHITE.multiply_alpha(0.0).a, 0);
        assert_eq!(Rgba::WHITE.multiply_alpha(2.0).a, 255);
        assert_eq!(Rgba::WHITE.multiply_alpha(75.0 / 255.0).a, 75);
    }
}
