//! WASM bindings for the dimensions crate.
//!
//! These bindings let the editor's size dialog run its selection logic
//! from JavaScript/TypeScript in the browser.

use crate::presets::catalog;
use crate::{
    classify, DialogStatus, DimensionDialog, DimensionLimits, Dimensions, PresetCategory,
    SelectionError,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: SelectionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Ratio label for a width/height pair.
///
/// # Arguments
/// * `width` - Canvas width in pixels
/// * `height` - Canvas height in pixels (must be positive)
#[wasm_bindgen(js_name = aspectRatioLabel)]
pub fn aspect_ratio_label(width: u32, height: u32) -> String {
    classify(width, height)
}

/// The preset catalog as JSON.
///
/// # Returns
/// JSON array of `{ key, title, presets: [...] }` in gallery order
#[wasm_bindgen(js_name = presetCatalogJson)]
pub fn preset_catalog_json() -> Result<String, JsValue> {
    let categories: Vec<_> = catalog()
        .map(|(category, presets)| {
            serde_json::json!({
                "key": category.key(),
                "title": category.title(),
                "presets": presets,
            })
        })
        .collect();

    serde_json::to_string(&categories)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Confirmation is reported to JS by [`DimensionSelector::confirm`], so the
/// Rust-side callback does nothing.
type NoCallback = fn(Dimensions);

/// One size dialog, owned by the JS component.
///
/// After `confirm` or `cancel` every call fails with "already closed".
#[wasm_bindgen]
pub struct DimensionSelector {
    dialog: DimensionDialog<NoCallback>,
}

#[wasm_bindgen]
impl DimensionSelector {
    /// Opens a selection seeded with the given size; missing sides default
    /// to 1920x1080.
    #[wasm_bindgen(constructor)]
    pub fn new(width: Option<u32>, height: Option<u32>) -> Result<DimensionSelector, JsValue> {
        let initial = Dimensions::new(
            width.unwrap_or(crate::DEFAULT_WIDTH),
            height.unwrap_or(crate::DEFAULT_HEIGHT),
        );
        let noop: NoCallback = |_| {};
        let dialog = DimensionDialog::open(Some(initial), DimensionLimits::default(), noop)
            .map_err(to_js_error)?;
        Ok(Self { dialog })
    }

    /// Applies the preset `name` of category `category`.
    #[wasm_bindgen(js_name = selectPreset)]
    pub fn select_preset(&mut self, category: &str, name: &str) -> Result<(), JsValue> {
        let category: PresetCategory = category.parse().map_err(to_js_error)?;
        self.dialog
            .select_preset_by_name(category, name)
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Raw width input from the numeric field.
    #[wasm_bindgen(js_name = setWidth)]
    pub fn set_width(&mut self, raw: &str) -> Result<(), JsValue> {
        self.dialog.set_width(raw).map_err(to_js_error)
    }

    /// Raw height input from the numeric field.
    #[wasm_bindgen(js_name = setHeight)]
    pub fn set_height(&mut self, raw: &str) -> Result<(), JsValue> {
        self.dialog.set_height(raw).map_err(to_js_error)
    }

    /// Engages or releases the proportion lock.
    #[wasm_bindgen(js_name = setProportionLock)]
    pub fn set_proportion_lock(&mut self, locked: bool) -> Result<(), JsValue> {
        self.dialog.set_proportion_lock(locked).map_err(to_js_error)
    }

    /// True while the proportion lock is engaged.
    #[wasm_bindgen(js_name = isProportionLocked)]
    pub fn is_proportion_locked(&self) -> bool {
        self.dialog.state().is_proportion_locked()
    }

    /// "Custom" after a manual edit, the ratio label otherwise.
    #[wasm_bindgen(js_name = ratioLabel)]
    pub fn ratio_label(&self) -> String {
        self.dialog.state().current_ratio_label()
    }

    /// Current width (0 while the input is empty).
    pub fn width(&self) -> u32 {
        self.dialog.state().dimensions().width
    }

    /// Current height (0 while the input is empty).
    pub fn height(&self) -> u32 {
        self.dialog.state().dimensions().height
    }

    /// Name of the highlighted preset card.
    #[wasm_bindgen(js_name = selectedPreset)]
    pub fn selected_preset(&self) -> Option<String> {
        self.dialog.state().selected_preset_name().map(String::from)
    }

    /// True when the card `name` of `category` should be highlighted.
    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, category: &str, name: &str) -> bool {
        match (category.parse::<PresetCategory>(), self.dialog.state().selected_preset()) {
            (Ok(category), Some(selected)) => selected == (category, name),
            _ => false,
        }
    }

    /// False once confirmed or cancelled.
    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Validates the pair, closes the dialog and passes the pair to
    /// `callback(width, height)`.
    ///
    /// A rejected pair leaves the dialog open and the callback uncalled.
    pub fn confirm(&mut self, callback: &js_sys::Function) -> Result<(), JsValue> {
        let dims = self.dialog.confirm().map_err(to_js_error)?;
        callback.call2(
            &JsValue::NULL,
            &JsValue::from(dims.width),
            &JsValue::from(dims.height),
        )?;
        Ok(())
    }

    /// Closes the dialog without producing a pair.
    pub fn cancel(&mut self) -> Result<(), JsValue> {
        self.dialog.cancel().map_err(to_js_error)
    }
}

impl DimensionSelector {
    /// Lifecycle status, for the Rust side.
    pub fn status(&self) -> DialogStatus {
        self.dialog.status()
    }
}

// JsValue construction panics off wasm32, so these stay on the success
// paths of the exported API and check failures through the dialog.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json() {
        let json = preset_catalog_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let categories = value.as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0]["key"], "common");
        assert_eq!(categories[1]["presets"][0]["name"], "Instagram Post");
    }

    #[test]
    fn test_aspect_ratio_label() {
        assert_eq!(aspect_ratio_label(1920, 1080), "16:9");
        assert_eq!(aspect_ratio_label(2480, 3508), "0.71:1");
    }

    #[test]
    fn test_selector_preset_then_edit() {
        let mut selector = DimensionSelector::new(None, None).unwrap();
        assert_eq!((selector.width(), selector.height()), (1920, 1080));

        selector.select_preset("social", "Instagram Post").unwrap();
        assert_eq!(selector.ratio_label(), "1:1");
        assert_eq!(selector.selected_preset().as_deref(), Some("Instagram Post"));
        assert!(selector.is_selected("social", "Instagram Post"));
        assert!(!selector.is_selected("presentation", "Instagram Post"));

        selector.set_width("1350").unwrap();
        assert_eq!(selector.ratio_label(), "Custom");
        assert!(selector.selected_preset().is_none());
    }

    #[test]
    fn test_selector_lock() {
        let mut selector = DimensionSelector::new(Some(1600), Some(900)).unwrap();
        selector.set_proportion_lock(true).unwrap();
        assert!(selector.is_proportion_locked());
        selector.set_height("450").unwrap();
        assert_eq!(selector.width(), 800);
    }

    #[test]
    fn test_selector_cancel_closes() {
        let mut selector = DimensionSelector::new(Some(800), Some(600)).unwrap();
        selector.cancel().unwrap();
        assert!(!selector.is_open());
        assert_eq!(selector.status(), DialogStatus::Cancelled);
        assert!(matches!(
            selector.dialog.set_width("640"),
            Err(SelectionError::DialogClosed)
        ));
        assert!(matches!(selector.dialog.confirm(), Err(SelectionError::DialogClosed)));
        assert_eq!(selector.width(), 800);
    }

    #[test]
    fn test_selector_confirm_closes_once() {
        let mut selector = DimensionSelector::new(None, None).unwrap();
        selector.select_preset("video", "720p").unwrap();
        let dims = selector.dialog.confirm().unwrap();
        assert_eq!(dims, Dimensions::new(1280, 720));
        assert!(!selector.is_open());
        assert!(matches!(selector.dialog.confirm(), Err(SelectionError::DialogClosed)));
        assert!(matches!(
            selector.dialog.select_preset_by_name(PresetCategory::Video, "4K"),
            Err(SelectionError::DialogClosed)
        ));
    }
}
