//! Square crop and resize before upload, using the image crate.

use crate::{validate_avatar, AvatarPolicy, ImageFormat, Result};
use image::{imageops::FilterType, DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use tracing::debug;

/// JPEG quality used when re-encoding avatars.
pub const JPEG_QUALITY: u8 = 85;

/// Avatar ready to upload.
#[derive(Debug, Clone)]
pub struct PreparedAvatar {
    /// Output format, JPEG for JPEG input and PNG otherwise
    pub format: ImageFormat,
    /// Side of the square output
    pub side: u32,
    /// Encoded bytes
    pub bytes: Vec<u8>,
}

/// Validate, center-crop to a square and shrink to `policy.output_side`.
///
/// Images smaller than the output side keep their cropped size; avatars
/// are never upscaled.
pub fn prepare_avatar(data: &[u8], policy: &AvatarPolicy) -> Result<PreparedAvatar> {
    let info = validate_avatar(data, policy)?;
    let img = image::load_from_memory(data)?;

    let crop_side = img.width().min(img.height());
    let x = (img.width() - crop_side) / 2;
    let y = (img.height() - crop_side) / 2;
    let cropped = img.crop_imm(x, y, crop_side, crop_side);

    let side = crop_side.min(policy.output_side);
    let resized = if side != crop_side {
        cropped.resize_exact(side, side, FilterType::Lanczos3)
    } else {
        cropped
    };

    // Animated GIFs and WebP collapse to their first frame
    let format = match info.format {
        ImageFormat::Jpeg => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    };
    let bytes = encode(&resized, format)?;

    debug!(
        from = %info.dimensions,
        side,
        format = ?format,
        bytes = bytes.len(),
        "Avatar prepared"
    );

    Ok(PreparedAvatar { format, side, bytes })
}

fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    let output_format = match format {
        ImageFormat::Jpeg => ImageOutputFormat::Jpeg(JPEG_QUALITY),
        _ => ImageOutputFormat::Png,
    };

    img.write_to(&mut buffer, output_format)?;
    Ok(buffer.into_inner())
}
