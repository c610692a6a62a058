//! Select command - replay a size dialog session
//!
//! Steps run in the order a user would take them in the dialog: open,
//! toggle the lock, click a preset, type into the inputs, confirm.

use super::print_json;
use crate::errors;
use canvas_cli::Status;
use canvas_core::config::CanvasConfig;
use canvas_core::error::exit_codes;
use canvas_core::{Error, Result};
use canvas_dimensions::{
    classify, lookup_preset, DimensionDialog, DimensionLimits, Dimensions, PresetCategory,
    SelectionOrigin,
};
use serde::Serialize;
use tracing::info;

/// Inputs of one replayed session
#[derive(Debug)]
pub struct Session<'a> {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub preset: Option<&'a str>,
    pub category: &'a str,
    pub set_width: Option<&'a str>,
    pub set_height: Option<&'a str>,
    pub lock: bool,
}

#[derive(Debug, Serialize)]
struct SelectOutput {
    dimensions: Dimensions,
    label: String,
    ratio: String,
    origin: SelectionOrigin,
    locked: bool,
}

/// Run select command
pub fn run(session: &Session<'_>, canvas: &CanvasConfig, json: bool) -> Result<i32> {
    canvas_telemetry::timed_span!("select");

    let limits = DimensionLimits::new(canvas.min_dimension, canvas.max_dimension)
        .map_err(errors::selection)?;
    let initial = match (session.width, session.height) {
        (Some(width), Some(height)) => Dimensions::new(width, height),
        _ => Dimensions::new(canvas.default_width, canvas.default_height),
    };

    let mut dialog = DimensionDialog::open(Some(initial), limits, |dims: Dimensions| {
        info!(%dims, "Canvas size confirmed");
    })
    .map_err(errors::selection)?;

    if session.lock || canvas.lock_proportions {
        dialog.set_proportion_lock(true).map_err(errors::selection)?;
    }

    if let Some(name) = session.preset {
        let category: PresetCategory = session.category.parse().map_err(errors::selection)?;
        let preset = lookup_preset(category, name)
            .ok_or_else(|| Error::unknown_preset(category.key(), name))?;
        dialog
            .select_preset(category, preset)
            .map_err(errors::selection)?;
    }

    if let Some(raw) = session.set_width {
        dialog.set_width(raw).map_err(errors::selection)?;
    }
    if let Some(raw) = session.set_height {
        dialog.set_height(raw).map_err(errors::selection)?;
    }

    let dims = dialog.confirm().map_err(errors::selection)?;
    let state = dialog.state();
    let output = SelectOutput {
        dimensions: dims,
        label: state.current_ratio_label(),
        ratio: classify(dims.width, dims.height),
        origin: state.origin(),
        locked: state.is_proportion_locked(),
    };

    if json {
        print_json(&output)?;
        return Ok(exit_codes::SUCCESS);
    }

    Status::success(&format!("Canvas {} ({})", output.dimensions, output.label));
    let origin = match output.origin {
        SelectionOrigin::Initial => "initial size".to_string(),
        SelectionOrigin::Preset { category, name } => format!("preset {} / {}", category, name),
        SelectionOrigin::Manual => "manual entry".to_string(),
    };
    Status::field("Source", origin);
    Status::field("Ratio", &output.ratio);
    Status::field("Locked", output.locked);

    Ok(exit_codes::SUCCESS)
}
