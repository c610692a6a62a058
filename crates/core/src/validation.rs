//! Form and input validation
//!
//! A fluent [`Validator`] collects every failing rule instead of stopping at
//! the first one, so a form can show all of its errors at once. The profile
//! forms are built on it:
//! - [`validate_profile_update`] for the display name
//! - [`validate_password_reset_request`] for the reset email
//! - [`validate_new_password`] for the new password and its confirmation
//!
//! # Example
//!
//! ```rust
//! use canvas_core::config::ProfileConfig;
//! use canvas_core::validation::validate_new_password;
//!
//! let result = validate_new_password("hunter22", "hunter2", &ProfileConfig::default());
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].code, "MISMATCH");
//! ```

use crate::config::ProfileConfig;
use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Errors reported for one field
    pub fn errors_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    fn fail(
        mut self,
        field: &str,
        code: &str,
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    ) -> Self {
        self.result.add_error(ValidationError {
            field: field.to_string(),
            message,
            code: code.to_string(),
            expected,
            actual,
        });
        self
    }

    /// Validate that a field is not blank
    pub fn required(self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            return self.fail(
                field,
                "REQUIRED",
                "Field is required".to_string(),
                Some("non-empty value".to_string()),
                Some("empty".to_string()),
            );
        }
        self
    }

    /// Validate minimum length in characters
    pub fn min_length(self, field: &str, value: &str, min: usize) -> Self {
        let len = value.chars().count();
        if len < min {
            return self.fail(
                field,
                "MIN_LENGTH",
                format!("Must be at least {} characters", min),
                Some(format!(">= {} chars", min)),
                Some(format!("{} chars", len)),
            );
        }
        self
    }

    /// Validate maximum length in characters
    pub fn max_length(self, field: &str, value: &str, max: usize) -> Self {
        let len = value.chars().count();
        if len > max {
            return self.fail(
                field,
                "MAX_LENGTH",
                format!("Must be at most {} characters", max),
                Some(format!("<= {} chars", max)),
                Some(format!("{} chars", len)),
            );
        }
        self
    }

    /// Validate against a precompiled regex
    pub fn pattern(self, field: &str, value: &str, re: &Regex, description: &str) -> Self {
        if !re.is_match(value) {
            return self.fail(
                field,
                "PATTERN",
                format!("Must match {}", description),
                Some(description.to_string()),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate an email address shape
    pub fn email(self, field: &str, value: &str) -> Self {
        if !EMAIL_RE.is_match(value.trim()) {
            return self.fail(
                field,
                "EMAIL",
                "Must be a valid email address".to_string(),
                Some("name@example.com".to_string()),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate that two fields hold the same value
    ///
    /// The values are not echoed back since this is used for passwords.
    pub fn matches(self, field: &str, value: &str, other_field: &str, other: &str) -> Self {
        if value != other {
            return self.fail(
                field,
                "MISMATCH",
                format!("Must match {}", other_field),
                None,
                None,
            );
        }
        self
    }

    /// Validate a numeric range
    pub fn range<T: PartialOrd + std::fmt::Display>(
        self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            return self.fail(
                field,
                "RANGE",
                format!("Must be between {} and {}", min, max),
                Some(format!("{} - {}", min, max)),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Add a custom validation
    pub fn custom<F>(self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        match f() {
            Some(message) => self.fail(field, "CUSTOM", message, None, None),
            None => self,
        }
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Validate the profile form's display name
pub fn validate_profile_update(display_name: &str, rules: &ProfileConfig) -> ValidationResult {
    let name = display_name.trim();
    let validator = Validator::new().required("display_name", name);

    // A blank name already failed; length errors would only repeat it
    if name.is_empty() {
        return validator.validate();
    }

    validator
        .min_length("display_name", name, rules.display_name_min)
        .max_length("display_name", name, rules.display_name_max)
        .validate()
}

/// Validate the email of a password reset request
pub fn validate_password_reset_request(email: &str) -> ValidationResult {
    let validator = Validator::new().required("email", email);
    if email.trim().is_empty() {
        return validator.validate();
    }
    validator.email("email", email).validate()
}

/// Validate a new password against the rules and its confirmation
pub fn validate_new_password(
    password: &str,
    confirmation: &str,
    rules: &ProfileConfig,
) -> ValidationResult {
    let validator = Validator::new().required("password", password);
    if password.is_empty() {
        return validator.validate();
    }

    validator
        .min_length("password", password, rules.password_min_length)
        .custom("password", || {
            (!password.chars().any(char::is_alphabetic))
                .then(|| "Must contain at least one letter".to_string())
        })
        .custom("password", || {
            (!password.chars().any(|c| c.is_ascii_digit()))
                .then(|| "Must contain at least one digit".to_string())
        })
        .matches("confirm_password", confirmation, "password", password)
        .warn_if(
            "password",
            password.trim() != password,
            "Leading or trailing spaces are part of the password",
        )
        .validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn codes(result: &ValidationResult) -> Vec<&str> {
        result.errors().iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn test_required_validation() {
        let result = Validator::new().required("name", "   ").validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
    }

    #[test]
    fn test_length_counts_characters() {
        // 4 characters, 8 bytes
        let result = Validator::new()
            .min_length("name", "Zoë✓", 4)
            .max_length("name", "Zoë✓", 4)
            .validate();
        assert!(result.is_valid());
    }

    #[test]
    fn test_max_length_validation() {
        let result = Validator::new().max_length("name", "abcdefghijk", 5).validate();
        assert_eq!(codes(&result), ["MAX_LENGTH"]);
        assert_eq!(result.errors()[0].actual.as_deref(), Some("11 chars"));
    }

    #[test]
    fn test_pattern_validation() {
        let re = Regex::new(r"^#[0-9a-f]{6}$").unwrap();
        let result = Validator::new().pattern("color", "red", &re, "hex color").validate();
        assert_eq!(codes(&result), ["PATTERN"]);
    }

    #[test]
    fn test_range_validation() {
        let result = Validator::new().range("count", 150, 1, 100).validate();
        assert_eq!(codes(&result), ["RANGE"]);
    }

    #[test]
    fn test_collects_all_errors() {
        let result = Validator::new()
            .required("a", "")
            .range("b", 0, 1, 2)
            .custom("c", || Some("nope".to_string()))
            .validate();
        assert_eq!(codes(&result), ["REQUIRED", "RANGE", "CUSTOM"]);

        let err = result.to_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("c: nope"));
    }

    #[test]
    fn test_display_name() {
        let rules = ProfileConfig::default();

        assert!(validate_profile_update("Ada", &rules).is_valid());
        assert!(validate_profile_update("  Jo  ", &rules).is_valid());
        assert_eq!(codes(&validate_profile_update(" J ", &rules)), ["MIN_LENGTH"]);
        assert_eq!(codes(&validate_profile_update(&"x".repeat(51), &rules)), ["MAX_LENGTH"]);
        assert_eq!(codes(&validate_profile_update("   ", &rules)), ["REQUIRED"]);
    }

    #[test]
    fn test_display_name_custom_bounds() {
        let rules = ProfileConfig {
            display_name_min: 4,
            display_name_max: 6,
            ..ProfileConfig::default()
        };
        assert!(!validate_profile_update("Ada", &rules).is_valid());
        assert!(validate_profile_update("Grace", &rules).is_valid());
    }

    #[test]
    fn test_reset_email() {
        assert!(validate_password_reset_request("ada@example.com").is_valid());
        assert!(validate_password_reset_request(" first.last+tag@mail.example.org ").is_valid());
        assert_eq!(codes(&validate_password_reset_request("")), ["REQUIRED"]);
        assert_eq!(codes(&validate_password_reset_request("ada@")), ["EMAIL"]);
        assert_eq!(codes(&validate_password_reset_request("ada.example.com")), ["EMAIL"]);
        assert_eq!(codes(&validate_password_reset_request("ada@example")), ["EMAIL"]);
    }

    #[test]
    fn test_new_password() {
        let rules = ProfileConfig::default();

        assert!(validate_new_password("correct1horse", "correct1horse", &rules).is_valid());
        assert_eq!(codes(&validate_new_password("", "", &rules)), ["REQUIRED"]);
        assert_eq!(codes(&validate_new_password("abc1", "abc1", &rules)), ["MIN_LENGTH"]);
        assert_eq!(codes(&validate_new_password("12345678", "12345678", &rules)), ["CUSTOM"]);
        assert_eq!(codes(&validate_new_password("abcdefgh", "abcdefgh", &rules)), ["CUSTOM"]);
    }

    #[test]
    fn test_new_password_mismatch_hides_values() {
        let result = validate_new_password("password1", "password2", &ProfileConfig::default());
        assert_eq!(codes(&result), ["MISMATCH"]);

        let error = &result.errors()[0];
        assert_eq!(error.field, "confirm_password");
        assert!(error.actual.is_none());
        assert_eq!(result.errors_for("password").count(), 0);
    }

    #[test]
    fn test_new_password_padding_warns() {
        let result = validate_new_password(" password1", " password1", &ProfileConfig::default());
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_error_schema_serialization() {
        let result = validate_profile_update("J", &ProfileConfig::default());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["errors"][0]["field"], "display_name");
        assert_eq!(json["errors"][0]["code"], "MIN_LENGTH");
        assert_eq!(json["errors"][0]["expected"], ">= 2 chars");
    }

    proptest! {
        #[test]
        fn prop_display_name_length_rule(name in "[a-zA-Z ]{0,60}") {
            let trimmed = name.trim().chars().count();
            let valid = validate_profile_update(&name, &ProfileConfig::default()).is_valid();
            prop_assert_eq!(valid, (2..=50).contains(&trimmed));
        }
    }
}
