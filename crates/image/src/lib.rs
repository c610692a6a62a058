//! Image helpers behind the profile avatar upload.
//!
//! This crate provides:
//! - Format detection from magic bytes
//! - Header-only dimension probing
//! - Avatar validation and the staged (not yet uploaded) avatar
//! - Square crop and resize before upload

#![warn(missing_docs)]

mod avatar;
mod detect;
mod error;
mod probe;

#[cfg(feature = "processing")]
mod prepare;

pub use avatar::{validate_avatar, AvatarCandidate, AvatarDraft, AvatarPolicy};
pub use detect::{detect_format, ImageFormat};
pub use error::{AvatarError, AvatarErrorCode, Result};
pub use probe::{probe, probe_dimensions, ImageInfo};

#[cfg(feature = "processing")]
pub use prepare::{prepare_avatar, PreparedAvatar};
