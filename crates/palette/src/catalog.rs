//! Named palettes offered by the palette picker.

use crate::{Result, Rgb};
use serde::Serialize;

/// A named set of swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Display name, unique in the catalog
    pub name: &'static str,
    /// Swatches as lowercase `#rrggbb`, in display order
    pub colors: &'static [&'static str],
}

impl Palette {
    /// Parsed swatches.
    pub fn rgb(&self) -> Result<Vec<Rgb>> {
        self.colors.iter().map(|c| Rgb::from_hex(c)).collect()
    }
}

static PALETTES: &[Palette] = &[
    Palette {
        name: "Vibrant",
        colors: &["#ff6b6b", "#feca57", "#48dbfb", "#1dd1a1", "#5f27cd"],
    },
    Palette {
        name: "Pastel",
        colors: &["#ffd1dc", "#ffe5b4", "#fdfd96", "#b5ead7", "#c7ceea"],
    },
    Palette {
        name: "Ocean",
        colors: &["#03045e", "#0077b6", "#00b4d8", "#90e0ef", "#caf0f8"],
    },
    Palette {
        name: "Sunset",
        colors: &["#ffcdb2", "#ffb4a2", "#e5989b", "#b5838d", "#6d6875"],
    },
    Palette {
        name: "Forest",
        colors: &["#2d6a4f", "#40916c", "#52b788", "#74c69d", "#95d5b2"],
    },
    Palette {
        name: "Monochrome",
        colors: &["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"],
    },
];

/// All palettes in picker order.
pub fn palettes() -> &'static [Palette] {
    PALETTES
}

/// Find a palette by name, ignoring case and surrounding whitespace.
pub fn find_palette(name: &str) -> Option<&'static Palette> {
    let name = name.trim();
    PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
