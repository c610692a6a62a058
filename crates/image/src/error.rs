//! Error types for the image crate.

use canvas_dimensions::Dimensions;
use thiserror::Error;

/// Result type alias for avatar operations.
pub type Result<T> = std::result::Result<T, AvatarError>;

/// Reasons an avatar file is refused.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// Zero-byte file
    #[error("Avatar file is empty")]
    Empty,

    /// File above the size limit
    #[error("Avatar is {size} bytes, the limit is {max} bytes")]
    TooLarge {
        /// Actual size in bytes
        size: usize,
        /// Allowed size in bytes
        max: usize,
    },

    /// Not a JPEG, PNG, GIF or WebP file
    #[error("Unsupported image format")]
    UnsupportedFormat,

    /// Header too short or corrupt
    #[error("Could not read image dimensions")]
    UnreadableDimensions,

    /// Shorter side below the minimum
    #[error("Avatar is {dimensions}, both sides must be at least {min}px")]
    TooSmall {
        /// Probed size
        dimensions: Dimensions,
        /// Required side
        min: u32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding or encoding failed
    #[cfg(feature = "processing")]
    #[error("Image processing error: {0}")]
    Processing(#[from] image::ImageError),
}

/// Error code for integration with canvas-core error handling.
/// Range: 13xxx for avatar errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarErrorCode {
    /// Zero-byte file
    Empty = 13001,
    /// File above the size limit
    TooLarge = 13002,
    /// Unsupported format
    UnsupportedFormat = 13003,
    /// Header unreadable
    UnreadableDimensions = 13004,
    /// Sides below the minimum
    TooSmall = 13005,
    /// IO error
    Io = 13006,
    /// Decoding or encoding failed
    Processing = 13007,
}

impl AvatarError {
    /// Returns the error code for this error.
    pub fn code(&self) -> AvatarErrorCode {
        match self {
            AvatarError::Empty => AvatarErrorCode::Empty,
            AvatarError::TooLarge { .. } => AvatarErrorCode::TooLarge,
            AvatarError::UnsupportedFormat => AvatarErrorCode::UnsupportedFormat,
            AvatarError::UnreadableDimensions => AvatarErrorCode::UnreadableDimensions,
            AvatarError::TooSmall { .. } => AvatarErrorCode::TooSmall,
            AvatarError::Io(_) => AvatarErrorCode::Io,
            #[cfg(feature = "processing")]
            AvatarError::Processing(_) => AvatarErrorCode::Processing,
        }
    }
}
