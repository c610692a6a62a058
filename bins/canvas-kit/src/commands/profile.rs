//! Validate-profile command - run the profile form schemas

use super::print_json;
use canvas_cli::Status;
use canvas_core::config::ProfileConfig;
use canvas_core::error::exit_codes;
use canvas_core::validation::{
    validate_new_password, validate_password_reset_request, validate_profile_update,
    ValidationResult,
};
use canvas_core::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProfileOutput {
    valid: bool,
    #[serde(flatten)]
    result: ValidationResult,
}

/// Run validate-profile command
///
/// Exits with the validation error code when any field fails.
pub fn run(
    name: Option<&str>,
    email: Option<&str>,
    password: Option<(&str, &str)>,
    rules: &ProfileConfig,
    json: bool,
) -> Result<i32> {
    if name.is_none() && email.is_none() && password.is_none() {
        return Err(Error::new(ErrorCode::InvalidArgument, "Nothing to validate")
            .with_suggestion("Pass --name, --email or --password with --confirm"));
    }

    let mut result = ValidationResult::new();
    if let Some(name) = name {
        result.merge(validate_profile_update(name, rules));
    }
    if let Some(email) = email {
        result.merge(validate_password_reset_request(email));
    }
    if let Some((password, confirmation)) = password {
        result.merge(validate_new_password(password, confirmation, rules));
    }

    let valid = result.is_valid();
    tracing::debug!(valid, errors = result.errors().len(), "Profile form validated");

    if json {
        print_json(&ProfileOutput { valid, result })?;
    } else {
        for warning in result.warnings() {
            Status::warning(&warning.to_string());
        }
        for error in result.errors() {
            Status::error(&error.to_string());
        }
        if valid {
            Status::success("Profile fields are valid");
        }
    }

    Ok(if valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_ERROR
    })
}
