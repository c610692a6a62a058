//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result, ResultExt};
use crate::validation::{ValidationResult, Validator};
use std::path::{Path, PathBuf};

/// Files searched, in order, when no explicit path is given
pub const CONFIG_CANDIDATES: [&str; 3] = [
    ".canvas-kit.toml",
    "canvas-kit.toml",
    ".config/canvas-kit.toml",
];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the first existing
    /// candidate in the current directory is used, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Path::new("."))
    }

    /// Same as [`Config::load`] with candidates resolved against `base`
    pub fn load_from(path: Option<&Path>, base: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(base),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        let config = Self {
            schema,
            path: config_path,
        };
        config
            .validate()
            .to_result()
            .map_err(|e| Error::new(ErrorCode::ConfigValidationError, e.message))
            .context(config.source_name())?;

        Ok(config)
    }

    /// Where the configuration came from, for messages
    pub fn source_name(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string())
    }

    /// Check cross-field constraints serde defaults cannot express
    pub fn validate(&self) -> ValidationResult {
        let canvas = &self.schema.canvas;
        let profile = &self.schema.profile;
        let avatar = &self.schema.avatar;

        Validator::new()
            .range("canvas.min_dimension", canvas.min_dimension, 1, u32::MAX)
            .custom("canvas.max_dimension", || {
                (canvas.min_dimension > canvas.max_dimension).then(|| {
                    format!(
                        "Must be at least min_dimension ({})",
                        canvas.min_dimension
                    )
                })
            })
            .range(
                "canvas.default_width",
                canvas.default_width,
                canvas.min_dimension,
                canvas.max_dimension,
            )
            .range(
                "canvas.default_height",
                canvas.default_height,
                canvas.min_dimension,
                canvas.max_dimension,
            )
            .custom("profile.display_name_max", || {
                (profile.display_name_min > profile.display_name_max).then(|| {
                    format!(
                        "Must be at least display_name_min ({})",
                        profile.display_name_min
                    )
                })
            })
            .range("profile.password_min_length", profile.password_min_length, 1, usize::MAX)
            .range("avatar.max_bytes", avatar.max_bytes, 1, usize::MAX)
            .range("avatar.min_side", avatar.min_side, 1, u32::MAX)
            .range("avatar.output_side", avatar.output_side, 1, u32::MAX)
            .validate()
    }
}

/// Find configuration file in standard locations
fn find_config_file(base: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.is_file())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}
