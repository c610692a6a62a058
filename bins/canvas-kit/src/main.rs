//! canvas-kit: canvas size, palette, profile and avatar tooling
//!
//! Drives the same state machines the canvas editor uses, so presets, ratio
//! labels and form rules can be checked from a terminal or a script.

use clap::{Parser, Subcommand};
use canvas_cli::Status;
use canvas_core::config::Config;
use canvas_core::error::exit_codes;
use canvas_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod errors;

use commands::{avatar, palette, presets, profile, ratio, select};

#[derive(Parser)]
#[command(name = "canvas-kit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a width and height into an aspect-ratio label
    Ratio {
        /// Width in pixels
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,
        /// Height in pixels
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },

    /// List format presets
    Presets {
        /// Only this category (common, social, presentation, print, video)
        #[arg(long)]
        category: Option<String>,
    },

    /// Replay a size dialog session and confirm it
    Select {
        /// Initial width
        #[arg(long, requires = "height")]
        width: Option<u32>,
        /// Initial height
        #[arg(long, requires = "width")]
        height: Option<u32>,
        /// Preset to click
        #[arg(long)]
        preset: Option<String>,
        /// Category of the preset
        #[arg(long, default_value = "common")]
        category: String,
        /// Text typed into the width input
        #[arg(long)]
        set_width: Option<String>,
        /// Text typed into the height input
        #[arg(long)]
        set_height: Option<String>,
        /// Lock proportions before editing
        #[arg(long)]
        lock: bool,
    },

    /// List color palettes
    Palettes,

    /// Show one palette
    Palette {
        /// Palette name
        name: String,
    },

    /// Validate profile form fields
    #[command(name = "validate-profile")]
    ValidateProfile {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email for a password reset
        #[arg(long)]
        email: Option<String>,
        /// New password
        #[arg(long, requires = "confirm")]
        password: Option<String>,
        /// Password confirmation
        #[arg(long, requires = "password")]
        confirm: Option<String>,
    },

    /// Validate an avatar image
    Avatar {
        /// Path to the image
        path: PathBuf,
        /// Write the cropped and resized avatar here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate every avatar image in a directory
    #[command(name = "avatar-scan")]
    AvatarScan {
        /// Directory to scan
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::report(&e);
            return ExitCode::from(exit_codes::CONFIG_ERROR as u8);
        }
    };

    let logging = &config.schema.logging;
    let telemetry =
        TelemetryConfig::new(logging.level.as_str(), logging.show_target).verbose(cli.verbose);
    if let Err(e) = canvas_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }
    tracing::debug!(config = %config.source_name(), "Configuration loaded");

    let json = cli.json;
    let result = match cli.command {
        Commands::Ratio { width, height } => ratio::run(width, height, json),

        Commands::Presets { category } => presets::run(category.as_deref(), json),

        Commands::Select {
            width,
            height,
            preset,
            category,
            set_width,
            set_height,
            lock,
        } => select::run(
            &select::Session {
                width,
                height,
                preset: preset.as_deref(),
                category: &category,
                set_width: set_width.as_deref(),
                set_height: set_height.as_deref(),
                lock,
            },
            &config.schema.canvas,
            json,
        ),

        Commands::Palettes => palette::list(json),

        Commands::Palette { name } => palette::show(&name, json),

        Commands::ValidateProfile {
            name,
            email,
            password,
            confirm,
        } => profile::run(
            name.as_deref(),
            email.as_deref(),
            password.as_deref().zip(confirm.as_deref()),
            &config.schema.profile,
            json,
        ),

        Commands::Avatar { path, output } => {
            avatar::check(&path, output.as_deref(), &config.schema.avatar, json)
        }

        Commands::AvatarScan { dir } => avatar::scan(&dir, &config.schema.avatar, json),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::debug!(code = %e.code, "Command failed");
            if json {
                match serde_json::to_string_pretty(&e.to_report()) {
                    Ok(report) => println!("{}", report),
                    Err(_) => Status::report(&e),
                }
            } else {
                Status::report(&e);
            }
            ExitCode::from(e.code.exit_code() as u8)
        }
    }
}
