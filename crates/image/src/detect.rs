//! Image format detection from magic bytes.

use crate::{AvatarError, Result};

/// Formats accepted for avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image
    Gif,
    /// WebP image
    WebP,
}

impl ImageFormat {
    /// MIME type sent with the upload.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Preferred file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
        }
    }
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Detect the avatar format from the leading bytes of a file.
///
/// # Example
/// ```
/// use canvas_image::{detect_format, ImageFormat};
///
/// let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
/// assert_eq!(detect_format(&png).unwrap(), ImageFormat::Png);
/// ```
pub fn detect_format(data: &[u8]) -> Result<ImageFormat> {
    if data.is_empty() {
        return Err(AvatarError::Empty);
    }

    let format = if data.starts_with(JPEG_SIGNATURE) {
        ImageFormat::Jpeg
    } else if data.starts_with(PNG_SIGNATURE) {
        ImageFormat::Png
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        ImageFormat::Gif
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        ImageFormat::WebP
    } else {
        return Err(AvatarError::UnsupportedFormat);
    };

    Ok(format)
}
