//! Error types for the palette crate.

use thiserror::Error;

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Errors that can occur while picking palettes and parsing colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No palette with this name
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    /// Text that is not a `#rgb`/`#rrggbb` color
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Error code for integration with canvas-core error handling.
/// Range: 12xxx for palette errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteErrorCode {
    /// No palette with this name
    UnknownPalette = 12001,
    /// Unparseable color
    InvalidColor = 12002,
}

impl PaletteError {
    /// Returns the error code for this error.
    pub fn code(&self) -> PaletteErrorCode {
        match self {
            PaletteError::UnknownPalette(_) => PaletteErrorCode::UnknownPalette,
            PaletteError::InvalidColor(_) => PaletteErrorCode::InvalidColor,
        }
    }
}
