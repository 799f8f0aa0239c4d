//! Jelly color palette
//!
//! Provides the track and fill colors for the jelly slider. The host applies
//! these when styling its view; the binder itself never touches color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Failed to parse a hex color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0:?}")]
pub struct ParseColorError(pub String);

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Create a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(hex.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Relative luminance in [0, 1] (Rec. 601 weights).
    pub fn luma(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)) / 255.0
    }

    /// Whether the color reads as light (used to pick contrasting text).
    pub fn is_light(self) -> bool {
        self.luma() > 0.5
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A complete color theme for the jelly slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Track background
    pub track: Color,

    /// Track mid-gradient highlight
    pub track_highlight: Color,

    /// Fill gradient start (near the track)
    pub fill_start: Color,

    /// Fill gradient midpoint
    pub fill_mid: Color,

    /// Text drawn on top of the fill
    pub text_on_fill: Color,

    /// Accent color (glow, thumb, labels)
    pub accent: Color,
}

impl Theme {
    /// Create the default dark theme.
    ///
    /// The darker track works better with the glow effects, so it is used
    /// for all accents.
    pub fn dark() -> Self {
        Self {
            track: Color::rgb(0x2a, 0x2a, 0x2a),
            track_highlight: Color::rgb(0x3d, 0x3d, 0x3d),
            fill_start: Color::rgb(0x4a, 0x4a, 0x4a),
            fill_mid: Color::rgb(0x5a, 0x5a, 0x5a),
            text_on_fill: Color::rgb(0x1a, 0x1a, 0x1a),
            accent: Color::rgb(0xc8, 0xff, 0x00),
        }
    }

    /// Dark theme with a custom accent.
    ///
    /// Text on the fill adapts to the accent's lightness so it stays
    /// readable against the glow.
    pub fn with_accent(accent: Color) -> Self {
        let text_on_fill = if accent.is_light() {
            Color::rgb(0x1a, 0x1a, 0x1a)
        } else {
            Color::rgb(0xf5, 0xf5, 0xf5)
        };
        Self {
            accent,
            text_on_fill,
            ..Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
