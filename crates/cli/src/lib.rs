//! Terminal helpers shared by the canvas-kit commands
//!
//! - Status messages and error reports
//! - Size, count and color swatch formatting
//! - Progress bars for directory scans

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::Status;
