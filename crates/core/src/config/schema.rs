//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub avatar: AvatarConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Canvas size dialog defaults and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width used when the dialog opens without a size
    #[serde(default = "default_width")]
    pub default_width: u32,

    /// Height used when the dialog opens without a size
    #[serde(default = "default_height")]
    pub default_height: u32,

    /// Smallest accepted side
    #[serde(default = "default_min_dimension")]
    pub min_dimension: u32,

    /// Largest accepted side
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// Start with the proportion lock on
    #[serde(default)]
    pub lock_proportions: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            default_height: default_height(),
            min_dimension: default_min_dimension(),
            max_dimension: default_max_dimension(),
            lock_proportions: false,
        }
    }
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_min_dimension() -> u32 {
    1
}

fn default_max_dimension() -> u32 {
    10_000
}

/// Profile form rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Minimum display name length in characters, after trimming
    #[serde(default = "default_display_name_min")]
    pub display_name_min: usize,

    /// Maximum display name length in characters, after trimming
    #[serde(default = "default_display_name_max")]
    pub display_name_max: usize,

    /// Minimum password length in characters
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name_min: default_display_name_min(),
            display_name_max: default_display_name_max(),
            password_min_length: default_password_min_length(),
        }
    }
}

fn default_display_name_min() -> usize {
    2
}

fn default_display_name_max() -> usize {
    50
}

fn default_password_min_length() -> usize {
    8
}

/// Avatar upload limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Largest accepted file in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Smallest accepted side in pixels
    #[serde(default = "default_min_side")]
    pub min_side: u32,

    /// Side of the square sent to the server
    #[serde(default = "default_output_side")]
    pub output_side: u32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            min_side: default_min_side(),
            output_side: default_output_side(),
        }
    }
}

fn default_max_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_min_side() -> u32 {
    128
}

fn default_output_side() -> u32 {
    512
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,

    /// Include the module target in log lines
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_target: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
