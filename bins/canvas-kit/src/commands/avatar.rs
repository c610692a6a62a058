//! Avatar commands - validate one avatar or a directory of them

use super::print_json;
use crate::errors;
use canvas_cli::output::{format_count, format_size};
use canvas_cli::{progress, Status};
use canvas_core::config::AvatarConfig;
use canvas_core::error::exit_codes;
use canvas_core::{Error, ErrorCode, Result, ResultExt};
use canvas_image::{prepare_avatar, validate_avatar, AvatarPolicy, ImageFormat, ImageInfo};
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Serialize)]
struct AvatarOutput {
    #[serde(flatten)]
    info: ImageInfo,
    mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PreparedOutput>,
}

#[derive(Debug, Serialize)]
struct PreparedOutput {
    path: String,
    format: ImageFormat,
    side: u32,
    size_bytes: usize,
}

#[derive(Debug, Serialize)]
struct ScanEntry {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<ImageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScanOutput {
    total: usize,
    accepted: usize,
    rejected: usize,
    files: Vec<ScanEntry>,
}

fn policy(config: &AvatarConfig) -> AvatarPolicy {
    AvatarPolicy {
        max_bytes: config.max_bytes,
        min_side: config.min_side,
        output_side: config.output_side,
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::file_not_found(path));
    }
    std::fs::read(path)
        .map_err(Error::from)
        .context(format!("Reading {}", path.display()))
}

/// Run avatar command
pub fn check(path: &Path, output: Option<&Path>, config: &AvatarConfig, json: bool) -> Result<i32> {
    canvas_telemetry::timed_span!("avatar");

    let policy = policy(config);
    let data = read(path)?;
    let info = validate_avatar(&data, &policy)
        .map_err(errors::avatar)
        .context(path.display().to_string())?;

    let prepared = match output {
        Some(out) => {
            let prepared = prepare_avatar(&data, &policy).map_err(errors::avatar)?;
            std::fs::write(out, &prepared.bytes)
                .map_err(Error::from)
                .context(format!("Writing {}", out.display()))?;
            Some(PreparedOutput {
                path: out.display().to_string(),
                format: prepared.format,
                side: prepared.side,
                size_bytes: prepared.bytes.len(),
            })
        }
        None => None,
    };

    let result = AvatarOutput {
        info,
        mime_type: info.format.mime_type(),
        output: prepared,
    };

    if json {
        print_json(&result)?;
        return Ok(exit_codes::SUCCESS);
    }

    Status::success(&format!("{} is a valid avatar", path.display()));
    Status::field("Format", result.mime_type);
    Status::field("Size", info.dimensions);
    Status::field("File", format_size(info.size_bytes as u64));
    if let Some(out) = &result.output {
        Status::field(
            "Written",
            format!(
                "{} ({}x{}, {})",
                out.path,
                out.side,
                out.side,
                format_size(out.size_bytes as u64)
            ),
        );
    }

    Ok(exit_codes::SUCCESS)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Run avatar-scan command
///
/// Exits with the validation error code when any image is rejected.
pub fn scan(dir: &Path, config: &AvatarConfig, json: bool) -> Result<i32> {
    canvas_telemetry::timed_span!("avatar_scan");

    if !dir.is_dir() {
        return Err(Error::new(
            ErrorCode::DirectoryNotFound,
            format!("Directory not found: {}", dir.display()),
        ));
    }

    let policy = policy(config);
    let mut paths: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_image(e.path()))
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    let pb = progress::file_progress(paths.len() as u64, !json);

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        pb.set_message(name.unwrap_or_default());
        let checked = std::fs::read(&path)
            .map_err(|e| e.to_string())
            .and_then(|data| validate_avatar(&data, &policy).map_err(|e| e.to_string()));
        if let Err(reason) = &checked {
            tracing::debug!(path = %path.display(), %reason, "Avatar rejected");
        }
        files.push(ScanEntry {
            path: path.display().to_string(),
            info: checked.as_ref().ok().copied(),
            error: checked.err(),
        });
        pb.inc(1);
    }

    let accepted = files.iter().filter(|f| f.error.is_none()).count();
    let output = ScanOutput {
        total: files.len(),
        accepted,
        rejected: files.len() - accepted,
        files,
    };

    if output.rejected == 0 {
        progress::finish_success(&pb, "Scan complete");
    } else {
        progress::finish_error(&pb, "Scan complete");
    }

    if json {
        print_json(&output)?;
    } else {
        for entry in output.files.iter().filter(|f| f.error.is_some()) {
            let reason = entry.error.as_deref().unwrap_or_default();
            Status::error(&format!("{}: {}", entry.path, reason));
        }
        Status::info(&format!(
            "{} checked, {} accepted, {} rejected",
            format_count(output.total, "image", "images"),
            output.accepted,
            output.rejected
        ));
    }

    Ok(if output.rejected == 0 {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_ERROR
    })
}
