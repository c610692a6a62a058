//! Ratio command - classify a width and height

use super::print_json;
use canvas_cli::output::format_count;
use canvas_cli::Status;
use canvas_core::error::exit_codes;
use canvas_core::Result;
use canvas_dimensions::presets::presets_matching;
use canvas_dimensions::{classify, AspectRatio, Dimensions, Orientation};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RatioOutput {
    width: u32,
    height: u32,
    label: String,
    reduced: String,
    orientation: Orientation,
    presets: Vec<PresetRef>,
}

#[derive(Debug, Serialize)]
struct PresetRef {
    category: &'static str,
    name: &'static str,
}

/// Run ratio command
pub fn run(width: u32, height: u32, json: bool) -> Result<i32> {
    canvas_telemetry::timed_span!("ratio", width, height);

    let dims = Dimensions::new(width, height);
    let output = RatioOutput {
        width,
        height,
        label: classify(width, height),
        reduced: AspectRatio::reduce(width, height).to_string(),
        orientation: dims.orientation(),
        presets: presets_matching(dims)
            .into_iter()
            .map(|(category, preset)| PresetRef {
                category: category.key(),
                name: preset.name,
            })
            .collect(),
    };

    if json {
        print_json(&output)?;
        return Ok(exit_codes::SUCCESS);
    }

    Status::header(&dims.to_string());
    Status::field("Ratio", &output.label);
    Status::field("Reduced", &output.reduced);
    Status::field("Orientation", output.orientation);

    if output.presets.is_empty() {
        Status::field("Presets", "none");
    } else {
        Status::field("Presets", format_count(output.presets.len(), "match", "matches"));
        for preset in &output.presets {
            println!("    {} / {}", preset.category, preset.name);
        }
    }

    Ok(exit_codes::SUCCESS)
}
