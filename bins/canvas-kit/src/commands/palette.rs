//! Palette commands - list palettes and show one palette

use super::print_json;
use crate::errors;
use canvas_cli::output::swatch;
use canvas_cli::Status;
use canvas_core::error::exit_codes;
use canvas_core::Result;
use canvas_palette::{palettes, PaletteSelector, Rgb};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ColorOutput {
    hex: String,
    rgb: Rgb,
    luminance: f64,
    dark: bool,
}

#[derive(Debug, Serialize)]
struct PaletteOutput {
    name: &'static str,
    colors: Vec<ColorOutput>,
}

/// Run palettes command
pub fn list(json: bool) -> Result<i32> {
    if json {
        print_json(&palettes())?;
        return Ok(exit_codes::SUCCESS);
    }

    Status::header("Palettes");
    for palette in palettes() {
        let swatches: Vec<String> = palette
            .rgb()
            .map_err(errors::palette)?
            .iter()
            .map(|c| swatch(c.r, c.g, c.b))
            .collect();
        println!("  {:<12} {}", palette.name, swatches.join(" "));
    }

    Ok(exit_codes::SUCCESS)
}

/// Run palette command
pub fn show(name: &str, json: bool) -> Result<i32> {
    let mut selector = PaletteSelector::new();
    let palette = selector.select(name).map_err(errors::palette)?;
    let colors = selector.colors().map_err(errors::palette)?;

    let output = PaletteOutput {
        name: palette.name,
        colors: colors
            .into_iter()
            .map(|rgb| ColorOutput {
                hex: rgb.to_hex(),
                rgb,
                luminance: rgb.luminance(),
                dark: rgb.is_dark(),
            })
            .collect(),
    };

    if json {
        print_json(&output)?;
        return Ok(exit_codes::SUCCESS);
    }

    Status::header(output.name);
    for color in &output.colors {
        let text = if color.dark { "light text" } else { "dark text" };
        println!(
            "  {}  luminance {:.3}, use {}",
            swatch(color.rgb.r, color.rgb.g, color.rgb.b),
            color.luminance,
            text
        );
    }

    Ok(exit_codes::SUCCESS)
}
