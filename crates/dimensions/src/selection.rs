//! Dimension-selection controller.
//!
//! [`SelectionState`] holds the width/height being edited in the size dialog
//! and remembers how the current pair came about: seeded by the caller,
//! picked from a preset card, or typed by hand. Everything the dialog shows
//! (highlighted card, "Custom" label, ratio label) is derived from that one
//! [`SelectionOrigin`], so the card highlight and the label cannot disagree.
//!
//! [`DimensionDialog`] wraps a state together with the caller's confirmation
//! callback and enforces the open/confirmed/cancelled lifecycle.

use crate::aspect_ratio::{classify, AspectRatio, CUSTOM_LABEL};
use crate::presets::{find_preset, FormatPreset, PresetCategory};
use crate::{Dimensions, Result, SelectionError};
use serde::Serialize;
use tracing::{debug, warn};

/// Largest side accepted by default.
pub const MAX_DIMENSION: u32 = 10_000;

/// Inclusive range of accepted canvas sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionLimits {
    /// Smallest accepted side, at least 1
    pub min: u32,
    /// Largest accepted side
    pub max: u32,
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self { min: 1, max: MAX_DIMENSION }
    }
}

impl DimensionLimits {
    /// Creates limits, rejecting a zero minimum or an empty range.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 || min > max {
            return Err(SelectionError::InvalidLimits { min, max });
        }
        Ok(Self { min, max })
    }

    /// True when `value` lies inside the range.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, axis: &'static str, value: u32) -> Result<u32> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(SelectionError::InvalidDimension {
                axis,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Validates both sides of a pair.
    pub fn check_pair(&self, dims: Dimensions) -> Result<Dimensions> {
        self.check("width", dims.width)?;
        self.check("height", dims.height)?;
        Ok(dims)
    }
}

/// Raw text of a numeric input together with the value it stands for.
///
/// Empty or non-numeric text counts as 0 while the user is still typing.
/// Digit strings too long for a `u32` saturate so that validation reports
/// them as too large instead of silently treating them as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionInput {
    raw: String,
    value: u32,
}

impl DimensionInput {
    /// Parses widget text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let value = if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            trimmed.parse().unwrap_or(u32::MAX)
        } else {
            0
        };
        Self {
            raw: raw.to_string(),
            value,
        }
    }

    /// Input holding a known value.
    pub fn from_value(value: u32) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }

    /// Text as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Numeric value, 0 for empty or non-numeric text.
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// How the current pair was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SelectionOrigin {
    /// Seeded when the dialog opened
    Initial,
    /// Produced by clicking a preset card
    Preset {
        /// Category of the clicked card
        category: PresetCategory,
        /// Name of the clicked card
        name: &'static str,
    },
    /// Edited through the numeric inputs
    Manual,
}

/// Mutable state of one dimension dialog session.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionState {
    width: DimensionInput,
    height: DimensionInput,
    origin: SelectionOrigin,
    lock: Option<AspectRatio>,
    limits: DimensionLimits,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            width: DimensionInput::from_value(crate::DEFAULT_WIDTH),
            height: DimensionInput::from_value(crate::DEFAULT_HEIGHT),
            origin: SelectionOrigin::Initial,
            lock: None,
            limits: DimensionLimits::default(),
        }
    }
}

impl SelectionState {
    /// Creates a state seeded with `initial`, or 1920x1080 when absent.
    ///
    /// Fails when the seed lies outside `limits`.
    pub fn initialize(initial: Option<Dimensions>, limits: DimensionLimits) -> Result<Self> {
        let dims = limits.check_pair(initial.unwrap_or_default())?;
        debug!(width = dims.width, height = dims.height, "Dimension selection initialized");

        Ok(Self {
            width: DimensionInput::from_value(dims.width),
            height: DimensionInput::from_value(dims.height),
            origin: SelectionOrigin::Initial,
            lock: None,
            limits,
        })
    }

    /// Applies a preset card.
    ///
    /// `preset` must be an entry of `category`; anything else is rejected
    /// and leaves the state untouched.
    pub fn select_preset(&mut self, category: PresetCategory, preset: &FormatPreset) -> Result<()> {
        if !category.contains(preset) {
            warn!(%category, preset = preset.name, "Rejected preset outside the catalog");
            return Err(SelectionError::UnknownPreset {
                category,
                name: preset.name.to_string(),
            });
        }

        self.width = DimensionInput::from_value(preset.width);
        self.height = DimensionInput::from_value(preset.height);
        self.origin = SelectionOrigin::Preset {
            category,
            name: preset.name,
        };
        if self.lock.is_some() {
            self.lock = Some(AspectRatio::reduce(preset.width, preset.height));
        }

        debug!(
            %category,
            preset = preset.name,
            width = preset.width,
            height = preset.height,
            "Preset selected"
        );
        Ok(())
    }

    /// Applies the preset named `name` in `category`.
    pub fn select_preset_by_name(
        &mut self,
        category: PresetCategory,
        name: &str,
    ) -> Result<&'static FormatPreset> {
        let preset = find_preset(category, name).ok_or_else(|| SelectionError::UnknownPreset {
            category,
            name: name.to_string(),
        })?;
        self.select_preset(category, preset)?;
        Ok(preset)
    }

    /// Manual edit of the width input.
    ///
    /// Always clears the preset selection, even when the new value happens
    /// to equal the selected preset's width.
    pub fn set_width(&mut self, raw: &str) {
        self.width = DimensionInput::parse(raw);
        self.origin = SelectionOrigin::Manual;

        if let Some(ratio) = self.lock {
            if let Some(height) = scale_side(self.width.value(), ratio.height, ratio.width) {
                self.height = DimensionInput::from_value(height);
            }
        }

        debug!(raw, width = self.width.value(), height = self.height.value(), "Width edited");
    }

    /// Manual edit of the height input. Same rules as [`Self::set_width`].
    pub fn set_height(&mut self, raw: &str) {
        self.height = DimensionInput::parse(raw);
        self.origin = SelectionOrigin::Manual;

        if let Some(ratio) = self.lock {
            if let Some(width) = scale_side(self.height.value(), ratio.width, ratio.height) {
                self.width = DimensionInput::from_value(width);
            }
        }

        debug!(raw, width = self.width.value(), height = self.height.value(), "Height edited");
    }

    /// Engages or releases the proportion lock.
    ///
    /// Engaging captures the current ratio and needs both sides to be
    /// non-zero.
    pub fn set_proportion_lock(&mut self, locked: bool) -> Result<()> {
        if !locked {
            self.lock = None;
            return Ok(());
        }

        let dims = self.dimensions();
        if !dims.is_positive() {
            let (axis, value) = if dims.width == 0 {
                ("width", dims.width)
            } else {
                ("height", dims.height)
            };
            return Err(SelectionError::InvalidDimension {
                axis,
                value,
                min: self.limits.min,
                max: self.limits.max,
            });
        }

        let ratio = AspectRatio::reduce(dims.width, dims.height);
        debug!(ratio = %ratio, "Proportion lock engaged");
        self.lock = Some(ratio);
        Ok(())
    }

    /// True while the proportion lock is engaged.
    pub fn is_proportion_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Current pair; a side is 0 while its input is empty or non-numeric.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width.value(), self.height.value())
    }

    /// Width input text.
    pub fn width_input(&self) -> &str {
        self.width.raw()
    }

    /// Height input text.
    pub fn height_input(&self) -> &str {
        self.height.raw()
    }

    /// How the current pair was produced.
    pub fn origin(&self) -> SelectionOrigin {
        self.origin
    }

    /// Accepted range of sides.
    pub fn limits(&self) -> DimensionLimits {
        self.limits
    }

    /// Category and name of the highlighted preset card.
    pub fn selected_preset(&self) -> Option<(PresetCategory, &'static str)> {
        match self.origin {
            SelectionOrigin::Preset { category, name } => Some((category, name)),
            _ => None,
        }
    }

    /// Name of the highlighted preset card.
    pub fn selected_preset_name(&self) -> Option<&'static str> {
        self.selected_preset().map(|(_, name)| name)
    }

    /// True when `preset` of `category` is the highlighted card.
    pub fn is_selected(&self, category: PresetCategory, preset: &FormatPreset) -> bool {
        self.selected_preset() == Some((category, preset.name))
    }

    /// True once the pair was typed by hand.
    pub fn is_custom(&self) -> bool {
        self.origin == SelectionOrigin::Manual
    }

    /// Label shown under the inputs: "Custom" after a manual edit, the
    /// classified ratio otherwise.
    pub fn current_ratio_label(&self) -> String {
        let dims = self.dimensions();
        if self.is_custom() || !dims.is_positive() {
            return CUSTOM_LABEL.to_string();
        }
        classify(dims.width, dims.height)
    }

    /// The current pair if both sides are within limits.
    pub fn validated(&self) -> Result<Dimensions> {
        self.limits.check_pair(self.dimensions())
    }
}

/// `value * numerator / denominator`, rounded and at least 1.
/// `None` when `value` is 0 so a cleared input leaves the other side alone.
fn scale_side(value: u32, numerator: u32, denominator: u32) -> Option<u32> {
    if value == 0 || denominator == 0 {
        return None;
    }
    let scaled = (f64::from(value) * f64::from(numerator) / f64::from(denominator)).round();
    Some((scaled as u32).max(1))
}

/// Lifecycle of a [`DimensionDialog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DialogStatus {
    /// Accepting edits
    Open,
    /// Closed with a pair handed to the caller
    Confirmed {
        /// Pair passed to the confirmation callback
        dimensions: Dimensions,
    },
    /// Closed without a pair
    Cancelled,
}

/// One open size dialog: the selection state plus the caller's callback.
///
/// The callback runs at most once, on the first successful [`confirm`].
/// Once confirmed or cancelled every operation fails with
/// [`SelectionError::DialogClosed`].
///
/// [`confirm`]: DimensionDialog::confirm
pub struct DimensionDialog<F>
where
    F: FnOnce(Dimensions),
{
    state: SelectionState,
    on_confirm: Option<F>,
    status: DialogStatus,
}

impl<F> DimensionDialog<F>
where
    F: FnOnce(Dimensions),
{
    /// Opens a dialog seeded with `initial` (1920x1080 when absent).
    pub fn open(
        initial: Option<Dimensions>,
        limits: DimensionLimits,
        on_confirm: F,
    ) -> Result<Self> {
        Ok(Self {
            state: SelectionState::initialize(initial, limits)?,
            on_confirm: Some(on_confirm),
            status: DialogStatus::Open,
        })
    }

    /// Read access for rendering.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current lifecycle status.
    pub fn status(&self) -> DialogStatus {
        self.status
    }

    /// True until confirmed or cancelled.
    pub fn is_open(&self) -> bool {
        self.status == DialogStatus::Open
    }

    fn state_mut(&mut self) -> Result<&mut SelectionState> {
        if self.is_open() {
            Ok(&mut self.state)
        } else {
            Err(SelectionError::DialogClosed)
        }
    }

    /// See [`SelectionState::select_preset`].
    pub fn select_preset(&mut self, category: PresetCategory, preset: &FormatPreset) -> Result<()> {
        self.state_mut()?.select_preset(category, preset)
    }

    /// See [`SelectionState::select_preset_by_name`].
    pub fn select_preset_by_name(
        &mut self,
        category: PresetCategory,
        name: &str,
    ) -> Result<&'static FormatPreset> {
        self.state_mut()?.select_preset_by_name(category, name)
    }

    /// See [`SelectionState::set_width`].
    pub fn set_width(&mut self, raw: &str) -> Result<()> {
        self.state_mut()?.set_width(raw);
        Ok(())
    }

    /// See [`SelectionState::set_height`].
    pub fn set_height(&mut self, raw: &str) -> Result<()> {
        self.state_mut()?.set_height(raw);
        Ok(())
    }

    /// See [`SelectionState::set_proportion_lock`].
    pub fn set_proportion_lock(&mut self, locked: bool) -> Result<()> {
        self.state_mut()?.set_proportion_lock(locked)
    }

    /// Hands the current pair to the callback and closes the dialog.
    ///
    /// A pair outside the limits is rejected and the dialog stays open.
    pub fn confirm(&mut self) -> Result<Dimensions> {
        let dims = match self.state_mut()?.validated() {
            Ok(dims) => dims,
            Err(err) => {
                warn!(error = %err, "Dimension dialog confirm rejected");
                return Err(err);
            }
        };

        if let Some(on_confirm) = self.on_confirm.take() {
            on_confirm(dims);
        }
        self.status = DialogStatus::Confirmed { dimensions: dims };

        debug!(width = dims.width, height = dims.height, "Dimension dialog confirmed");
        Ok(dims)
    }

    /// Closes the dialog without producing a pair.
    pub fn cancel(&mut self) -> Result<()> {
        self.state_mut()?;
        self.on_confirm = None;
        self.status = DialogStatus::Cancelled;
        debug!("Dimension dialog cancelled");
        Ok(())
    }
}

impl<F> std::fmt::Debug for DimensionDialog<F>
where
    F: FnOnce(Dimensions),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DimensionDialog")
            .field("state", &self.state)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
