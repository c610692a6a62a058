//! Error types for the dimensions crate.

use crate::presets::PresetCategory;
use thiserror::Error;

/// Result type alias for dimension-selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Errors raised at the dimension controller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A preset that is not part of the static catalog
    #[error("Unknown preset '{name}' in category '{category}'")]
    UnknownPreset {
        /// Category the caller asked for
        category: PresetCategory,
        /// Preset name the caller passed
        name: String,
    },

    /// Unknown category key
    #[error("Unknown preset category: {0}")]
    UnknownCategory(String),

    /// A side outside the accepted range
    #[error("Invalid {axis}: {value} (expected {min}..={max})")]
    InvalidDimension {
        /// "width" or "height"
        axis: &'static str,
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// Limits where `min` is zero or greater than `max`
    #[error("Invalid dimension limits: {min}..={max}")]
    InvalidLimits {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },

    /// Operation on a dialog that was already confirmed or cancelled
    #[error("Dimension dialog is already closed")]
    DialogClosed,
}

/// Error code for integration with canvas-core error handling.
/// Range: 11xxx for dimension selection errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionErrorCode {
    /// Preset not in the catalog
    UnknownPreset = 11001,
    /// Category key not recognised
    UnknownCategory = 11002,
    /// Side out of range
    InvalidDimension = 11003,
    /// Bad limits
    InvalidLimits = 11004,
    /// Dialog already closed
    DialogClosed = 11005,
}

impl SelectionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SelectionErrorCode {
        match self {
            SelectionError::UnknownPreset { .. } => SelectionErrorCode::UnknownPreset,
            SelectionError::UnknownCategory(_) => SelectionErrorCode::UnknownCategory,
            SelectionError::InvalidDimension { .. } => SelectionErrorCode::InvalidDimension,
            SelectionError::InvalidLimits { .. } => SelectionErrorCode::InvalidLimits,
            SelectionError::DialogClosed => SelectionErrorCode::DialogClosed,
        }
    }
}
