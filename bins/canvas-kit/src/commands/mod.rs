//! CLI command implementations
//!
//! Each command returns the process exit code, or an application error that
//! `main` reports.

pub mod avatar;
pub mod palette;
pub mod presets;
pub mod profile;
pub mod ratio;
pub mod select;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> canvas_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
