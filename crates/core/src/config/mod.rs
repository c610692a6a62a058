//! Configuration loading and schema definitions
//!
//! One TOML file drives the canvas defaults, profile form rules, avatar
//! limits and logging.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_CANDIDATES};
pub use schema::*;
