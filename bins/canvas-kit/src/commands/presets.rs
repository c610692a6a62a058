//! Presets command - list the format preset catalog

use super::print_json;
use crate::errors;
use canvas_cli::Status;
use canvas_core::error::exit_codes;
use canvas_core::Result;
use canvas_dimensions::{FormatPreset, PresetCategory};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CategoryOutput {
    category: &'static str,
    title: &'static str,
    presets: Vec<PresetOutput>,
}

#[derive(Debug, Serialize)]
struct PresetOutput {
    #[serde(flatten)]
    preset: FormatPreset,
    label: String,
}

/// Run presets command
pub fn run(category: Option<&str>, json: bool) -> Result<i32> {
    let categories = match category {
        Some(key) => vec![key.parse::<PresetCategory>().map_err(errors::selection)?],
        None => PresetCategory::ALL.to_vec(),
    };

    let output: Vec<CategoryOutput> = categories
        .into_iter()
        .map(|category| CategoryOutput {
            category: category.key(),
            title: category.title(),
            presets: category
                .presets()
                .iter()
                .map(|preset| PresetOutput {
                    preset: *preset,
                    label: preset.dimensions().ratio_label(),
                })
                .collect(),
        })
        .collect();

    if json {
        print_json(&output)?;
        return Ok(exit_codes::SUCCESS);
    }

    for category in &output {
        Status::header(&format!("{} ({})", category.title, category.category));
        for entry in &category.presets {
            let size = format!("{}x{}", entry.preset.width, entry.preset.height);
            let label = entry.label.if_supports_color(Stream::Stdout, |t| t.cyan());
            print!("  {:<22} {:>10}  {:<7}", entry.preset.name, size, label);
            match entry.preset.description {
                Some(description) => {
                    println!(" {}", description.if_supports_color(Stream::Stdout, |t| t.dimmed()))
                }
                None => println!(),
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
