//! Mapping of library errors onto application error codes

use canvas_core::{Error, ErrorCode};
use canvas_dimensions::SelectionError;
use canvas_image::AvatarError;
use canvas_palette::PaletteError;

/// Canvas size and preset errors
pub fn selection(err: SelectionError) -> Error {
    if let SelectionError::UnknownPreset { category, name } = &err {
        return Error::unknown_preset(category.key(), name).with_source(err);
    }

    let code = match &err {
        SelectionError::UnknownPreset { .. } => ErrorCode::UnknownPreset,
        SelectionError::UnknownCategory(_) => ErrorCode::UnknownCategory,
        SelectionError::InvalidDimension { .. } | SelectionError::InvalidLimits { .. } => {
            ErrorCode::InvalidDimension
        }
        SelectionError::DialogClosed => ErrorCode::Internal,
    };

    let suggestion = match &err {
        SelectionError::UnknownCategory(_) => {
            Some("Categories are common, social, presentation, print and video")
        }
        _ => None,
    };

    let mut error = Error::canvas(code, err.to_string());
    if let Some(suggestion) = suggestion {
        error = error.with_suggestion(suggestion);
    }
    error.with_source(err)
}

/// Palette lookup errors
pub fn palette(err: PaletteError) -> Error {
    let code = match &err {
        PaletteError::UnknownPalette(_) => ErrorCode::UnknownPalette,
        PaletteError::InvalidColor(_) => ErrorCode::InvalidColor,
    };
    Error::canvas(code, err.to_string())
        .with_suggestion("Run `canvas-kit palettes` to list the available palettes")
        .with_source(err)
}

/// Avatar validation and processing errors
pub fn avatar(err: AvatarError) -> Error {
    let code = match &err {
        AvatarError::Empty | AvatarError::UnreadableDimensions => ErrorCode::UnreadableImage,
        AvatarError::TooLarge { .. } => ErrorCode::ImageTooLarge,
        AvatarError::UnsupportedFormat => ErrorCode::UnsupportedFormat,
        AvatarError::TooSmall { .. } => ErrorCode::ImageTooSmall,
        AvatarError::Io(_) => ErrorCode::IoError,
        _ => ErrorCode::MediaError,
    };
    Error::media(code, err.to_string()).with_source(err)
}
