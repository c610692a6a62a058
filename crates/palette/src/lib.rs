//! Color palettes for the canvas editor.
//!
//! This crate provides:
//! - Hex color parsing and formatting
//! - The static catalog of named palettes shown in the palette picker
//! - A selector tracking the palette the user picked
//!
//! # Example
//!
//! ```
//! use canvas_palette::{PaletteSelector, Rgb};
//!
//! let mut selector = PaletteSelector::new();
//! let palette = selector.select("ocean").unwrap();
//! assert_eq!(palette.name, "Ocean");
//!
//! let navy = Rgb::from_hex("#03045e").unwrap();
//! assert!(navy.is_dark());
//! ```

mod catalog;
mod error;
mod selector;

pub use catalog::{find_palette, palettes, Palette};
pub use error::{PaletteError, PaletteErrorCode, Result};
pub use selector::PaletteSelector;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Luminance below which white text reads better than black.
const DARK_LUMINANCE: f64 = 0.179;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb` (the `#` is optional, case-insensitive).
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColor(input.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| PaletteError::InvalidColor(input.to_string()))
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(digits[i..=i].repeat(2).as_str());
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(PaletteError::InvalidColor(input.to_string())),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// True when a swatch of this color needs light text.
    pub fn is_dark(&self) -> bool {
        self.luminance() < DARK_LUMINANCE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Rgb::from_hex("#FF6B6B").unwrap(), Rgb::new(255, 107, 107));
        assert_eq!(Rgb::from_hex("00b4d8").unwrap(), Rgb::new(0, 180, 216));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_hex("#1a2").unwrap(), Rgb::new(0x11, 0xaa, 0x22));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "#", "#12", "#12345", "#ggg", "#+1+2+3", "rgb(0,0,0)", "#ééé"] {
            assert!(
                matches!(Rgb::from_hex(input), Err(PaletteError::InvalidColor(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
        assert_eq!("#ABC".parse::<Rgb>().unwrap().to_string(), "#aabbcc");
    }

    #[test]
    fn test_luminance_bounds() {
        assert!(Rgb::new(0, 0, 0).luminance().abs() < 1e-9);
        assert!((Rgb::new(255, 255, 255).luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_dark() {
        assert!(Rgb::new(0, 0, 0).is_dark());
        assert!(Rgb::from_hex("#03045e").unwrap().is_dark());
        assert!(!Rgb::new(255, 255, 255).is_dark());
        assert!(!Rgb::from_hex("#feca57").unwrap().is_dark());
    }
}
