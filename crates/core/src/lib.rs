//! Shared building blocks for the canvas-kit tools
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Validation**: fluent validator and the profile form schemas
//!
//! # Example
//!
//! ```rust,no_run
//! use canvas_core::config::Config;
//! use canvas_core::validation::validate_profile_update;
//!
//! let config = Config::load(None)?;
//! let result = validate_profile_update("Ada Lovelace", &config.schema.profile);
//! assert!(result.is_valid());
//! # Ok::<(), canvas_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
