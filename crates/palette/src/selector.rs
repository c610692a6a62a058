//! Palette picker state.

use crate::catalog::{find_palette, Palette};
use crate::{PaletteError, Result, Rgb};
use tracing::debug;

/// Remembers which palette the user picked.
#[derive(Debug, Clone, Default)]
pub struct PaletteSelector {
    selected: Option<&'static Palette>,
}

impl PaletteSelector {
    /// Selector with nothing picked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the palette called `name`.
    ///
    /// An unknown name keeps the previous selection.
    pub fn select(&mut self, name: &str) -> Result<&'static Palette> {
        let palette =
            find_palette(name).ok_or_else(|| PaletteError::UnknownPalette(name.to_string()))?;
        debug!(palette = palette.name, "Palette selected");
        self.selected = Some(palette);
        Ok(palette)
    }

    /// The picked palette.
    pub fn selected(&self) -> Option<&'static Palette> {
        self.selected
    }

    /// True when `palette` is the picked one.
    pub fn is_selected(&self, palette: &Palette) -> bool {
        self.selected.is_some_and(|p| p.name == palette.name)
    }

    /// Forgets the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Parsed swatches of the picked palette, empty when nothing is picked.
    pub fn colors(&self) -> Result<Vec<Rgb>> {
        match self.selected {
            Some(palette) => palette.rgb(),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear() {
        let mut selector = PaletteSelector::new();
        assert!(selector.selected().is_none());
        assert!(selector.colors().unwrap().is_empty());

        let palette = selector.select("pastel").unwrap();
        assert_eq!(palette.name, "Pastel");
        assert!(selector.is_selected(palette));
        assert_eq!(selector.colors().unwrap()[0], Rgb::new(0xff, 0xd1, 0xdc));

        selector.clear();
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_unknown_keeps_previous() {
        let mut selector = PaletteSelector::new();
        selector.select("Ocean").unwrap();
        let err = selector.select("Lava").unwrap_err();
        assert_eq!(err, PaletteError::UnknownPalette("Lava".into()));
        assert_eq!(selector.selected().unwrap().name, "Ocean");
    }

    #[test]
    fn test_palette_serializes() {
        let palette = crate::find_palette("Forest").unwrap();
        let json = serde_json::to_value(palette).unwrap();
        assert_eq!(json["name"], "Forest");
        assert_eq!(json["colors"].as_array().unwrap().len(), 5);
    }
}
