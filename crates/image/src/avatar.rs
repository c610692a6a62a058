//! Avatar validation and the staged avatar of the profile form.

use crate::{probe, AvatarError, ImageInfo, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Limits applied to uploaded avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarPolicy {
    /// Largest accepted file in bytes
    pub max_bytes: usize,
    /// Smallest accepted side in pixels
    pub min_side: u32,
    /// Side of the square sent to the server
    pub output_side: u32,
}

impl Default for AvatarPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            min_side: 128,
            output_side: 512,
        }
    }
}

/// Check an avatar file against `policy`.
///
/// # Arguments
/// * `data` - Complete file contents
/// * `policy` - Size and dimension limits
///
/// # Returns
/// Format and dimensions of the accepted file
pub fn validate_avatar(data: &[u8], policy: &AvatarPolicy) -> Result<ImageInfo> {
    if data.is_empty() {
        return Err(AvatarError::Empty);
    }
    if data.len() > policy.max_bytes {
        return Err(AvatarError::TooLarge {
            size: data.len(),
            max: policy.max_bytes,
        });
    }

    let info = probe(data)?;
    if info.dimensions.width < policy.min_side || info.dimensions.height < policy.min_side {
        return Err(AvatarError::TooSmall {
            dimensions: info.dimensions,
            min: policy.min_side,
        });
    }

    Ok(info)
}

/// A validated avatar waiting for the user to save the profile.
#[derive(Debug, Clone)]
pub struct AvatarCandidate {
    info: ImageInfo,
    data: Vec<u8>,
}

impl AvatarCandidate {
    /// Format and dimensions.
    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    /// File contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the candidate, returning the file contents for upload.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Avatar picked in the profile form but not uploaded yet.
///
/// Picking a new file replaces the staged one; closing the form without
/// saving discards it.
#[derive(Debug, Default)]
pub struct AvatarDraft {
    policy: AvatarPolicy,
    staged: Option<AvatarCandidate>,
}

impl AvatarDraft {
    /// Empty draft using `policy`.
    pub fn new(policy: AvatarPolicy) -> Self {
        Self { policy, staged: None }
    }

    /// Validates `data` and stages it.
    ///
    /// A rejected file leaves the previously staged avatar in place.
    pub fn select(&mut self, data: Vec<u8>) -> Result<&AvatarCandidate> {
        let info = validate_avatar(&data, &self.policy)?;
        debug!(format = ?info.format, dimensions = %info.dimensions, "Avatar staged");
        Ok(self.staged.insert(AvatarCandidate { info, data }))
    }

    /// The staged avatar, if any.
    pub fn staged(&self) -> Option<&AvatarCandidate> {
        self.staged.as_ref()
    }

    /// True while an avatar is staged.
    pub fn is_staged(&self) -> bool {
        self.staged.is_some()
    }

    /// Hands the staged avatar to the uploader, leaving the draft empty.
    pub fn take(&mut self) -> Option<AvatarCandidate> {
        self.staged.take()
    }

    /// Drops the staged avatar without uploading it.
    pub fn discard(&mut self) {
        if self.staged.take().is_some() {
            debug!("Staged avatar discarded");
        }
    }
}
