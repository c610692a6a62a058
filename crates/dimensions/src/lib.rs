//! Canvas dimension utilities for the editor's "new design" dialog.
//!
//! This crate provides:
//! - Aspect-ratio labels ("16:9", "7:4", "0.71:1") for any width/height pair
//! - The static catalog of format presets grouped by category
//! - The dimension-selection controller backing the size dialog
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use canvas_dimensions::{DimensionDialog, DimensionLimits, PresetCategory};
//!
//! let mut confirmed = None;
//! let mut dialog = DimensionDialog::open(None, DimensionLimits::default(), |dims| {
//!     confirmed = Some(dims);
//! })
//! .unwrap();
//!
//! dialog.select_preset_by_name(PresetCategory::Social, "Instagram Post").unwrap();
//! assert_eq!(dialog.state().current_ratio_label(), "1:1");
//!
//! dialog.confirm().unwrap();
//! drop(dialog);
//! assert_eq!(confirmed.map(|d| (d.width, d.height)), Some((1080, 1080)));
//! ```

mod aspect_ratio;
mod error;
pub mod presets;
pub mod selection;

#[cfg(feature = "wasm")]
mod wasm;

pub use aspect_ratio::{classify, gcd, AspectRatio, CUSTOM_LABEL, NAMED_RATIOS, RATIO_TOLERANCE};
pub use error::{Result, SelectionError, SelectionErrorCode};
pub use presets::{find_preset, lookup_preset, presets_matching, FormatPreset, PresetCategory};
pub use selection::{
    DialogStatus, DimensionDialog, DimensionInput, DimensionLimits, SelectionOrigin,
    SelectionState,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width used when the caller does not seed the dialog.
pub const DEFAULT_WIDTH: u32 = 1920;

/// Height used when the caller does not seed the dialog.
pub const DEFAULT_HEIGHT: u32 = 1080;

/// A canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Creates a new pair.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true when both sides are non-zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Orientation of the pair.
    pub fn orientation(&self) -> Orientation {
        match self.width.cmp(&self.height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => Orientation::Square,
        }
    }

    /// Human-readable ratio label for this pair.
    ///
    /// Callers must only pass positive pairs; see [`classify`].
    pub fn ratio_label(&self) -> String {
        classify(self.width, self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl From<Dimensions> for (u32, u32) {
    fn from(dims: Dimensions) -> Self {
        (dims.width, dims.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Canvas orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wider than tall
    Landscape,
    /// Taller than wide
    Portrait,
    /// Equal sides
    Square,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
            Orientation::Square => "Square",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = Dimensions::default();
        assert_eq!(dims, Dimensions::new(1920, 1080));
        assert_eq!(dims.to_string(), "1920x1080");
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Dimensions::new(1920, 1080).orientation(), Orientation::Landscape);
        assert_eq!(Dimensions::new(1080, 1920).orientation(), Orientation::Portrait);
        assert_eq!(Dimensions::new(500, 500).orientation(), Orientation::Square);
    }

    #[test]
    fn test_positive() {
        assert!(Dimensions::new(1, 1).is_positive());
        assert!(!Dimensions::new(0, 1080).is_positive());
        assert!(!Dimensions::new(1920, 0).is_positive());
    }

    #[test]
    fn test_tuple_conversions() {
        let dims: Dimensions = (1600, 1200).into();
        assert_eq!(dims.ratio_label(), "4:3");
        let pair: (u32, u32) = dims.into();
        assert_eq!(pair, (1600, 1200));
    }
}
