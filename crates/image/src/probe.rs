//! Header-only dimension probing.
//!
//! Reads width and height straight from the file header so an avatar can be
//! checked before anything is decoded or uploaded.

use crate::{detect_format, AvatarError, ImageFormat, Result};
use canvas_dimensions::Dimensions;
use serde::{Deserialize, Serialize};

/// Format, size and byte count of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Detected format
    pub format: ImageFormat,
    /// Pixel size from the header
    pub dimensions: Dimensions,
    /// File size in bytes
    pub size_bytes: usize,
}

/// Detect the format and read the dimensions of `data`.
pub fn probe(data: &[u8]) -> Result<ImageInfo> {
    let format = detect_format(data)?;
    let dimensions = probe_dimensions(format, data).ok_or(AvatarError::UnreadableDimensions)?;

    Ok(ImageInfo {
        format,
        dimensions,
        size_bytes: data.len(),
    })
}

/// Width and height from the header of an image already known to be `format`.
///
/// Returns `None` for truncated or malformed headers and for zero-sized images.
pub fn probe_dimensions(format: ImageFormat, data: &[u8]) -> Option<Dimensions> {
    let dims = match format {
        ImageFormat::Png => png_dimensions(data),
        ImageFormat::Gif => gif_dimensions(data),
        ImageFormat::Jpeg => jpeg_dimensions(data),
        ImageFormat::WebP => webp_dimensions(data),
    }?;

    dims.is_positive().then_some(dims)
}

fn be_u16(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 2)?;
    Some(u32::from(u16::from_be_bytes([bytes[0], bytes[1]])))
}

fn le_u16(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 2)?;
    Some(u32::from(u16::from_le_bytes([bytes[0], bytes[1]])))
}

fn be_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 4)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn le_u24(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 3)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
}

/// IHDR is always the first chunk, right after the 8-byte signature.
fn png_dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.get(12..16)? != b"IHDR" {
        return None;
    }
    Some(Dimensions::new(be_u32(data, 16)?, be_u32(data, 20)?))
}

/// Logical screen size follows the 6-byte signature.
fn gif_dimensions(data: &[u8]) -> Option<Dimensions> {
    Some(Dimensions::new(le_u16(data, 6)?, le_u16(data, 8)?))
}

/// Walks the marker segments until a start-of-frame marker.
fn jpeg_dimensions(data: &[u8]) -> Option<Dimensions> {
    let mut pos = 2;

    loop {
        // Fill bytes may precede a marker
        while *data.get(pos)? == 0xFF && *data.get(pos + 1)? == 0xFF {
            pos += 1;
        }
        if *data.get(pos)? != 0xFF {
            return None;
        }

        let marker = *data.get(pos + 1)?;
        match marker {
            // Standalone markers carry no length
            0x01 | 0xD0..=0xD7 => pos += 2,
            0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => {
                let height = be_u16(data, pos + 5)?;
                let width = be_u16(data, pos + 7)?;
                return Some(Dimensions::new(width, height));
            }
            0xD9 | 0xDA => return None,
            _ => {
                let length = be_u16(data, pos + 2)? as usize;
                if length < 2 {
                    return None;
                }
                pos += 2 + length;
            }
        }
    }
}

/// Handles the lossy (`VP8 `), lossless (`VP8L`) and extended (`VP8X`) layouts.
fn webp_dimensions(data: &[u8]) -> Option<Dimensions> {
    match data.get(12..16)? {
        b"VP8 " => {
            if data.get(23..26)? != [0x9D, 0x01, 0x2A] {
                return None;
            }
            Some(Dimensions::new(le_u16(data, 26)? & 0x3FFF, le_u16(data, 28)? & 0x3FFF))
        }
        b"VP8L" => {
            if *data.get(20)? != 0x2F {
                return None;
            }
            let bytes = data.get(21..25)?;
            let bits = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            Some(Dimensions::new((bits & 0x3FFF) + 1, ((bits >> 14) & 0x3FFF) + 1))
        }
        b"VP8X" => Some(Dimensions::new(le_u24(data, 24)? + 1, le_u24(data, 27)? + 1)),
        _ => None,
    }
}
