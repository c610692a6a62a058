//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use canvas_core::Error;
use owo_colors::{OwoColorize, Stream, Style};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".if_supports_color(Stream::Stderr, |t| t.red()), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".if_supports_color(Stream::Stdout, |t| t.blue()), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a labelled value, aligned for short key/value listings
    pub fn field(label: &str, value: impl std::fmt::Display) {
        let label = format!("{}:", label);
        println!("  {:<12} {}", label.if_supports_color(Stream::Stdout, |t| t.dimmed()), value);
    }

    /// Print an application error with its code, context and suggestion
    pub fn report(err: &Error) {
        let code = err.code.to_string();
        eprintln!(
            "{} {} {}",
            "✗".if_supports_color(Stream::Stderr, |t| t.red()),
            code.if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
            err.message
        );
        if let Some(context) = &err.context {
            let label = "context:".if_supports_color(Stream::Stderr, |t| t.dimmed());
            eprintln!("  {} {}", label, context);
        }
        if let Some(suggestion) = &err.suggestion {
            let label = "hint:".if_supports_color(Stream::Stderr, |t| t.cyan());
            eprintln!("  {} {}", label, suggestion);
        }
    }
}

/// Render a color as a two-cell swatch followed by its hex code
pub fn swatch(r: u8, g: u8, b: u8) -> String {
    format!(
        "{} #{:02x}{:02x}{:02x}",
        "  ".if_supports_color(Stream::Stdout, |t| t.on_truecolor(r, g, b)),
        r,
        g,
        b
    )
}

/// Format a file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(500), "500 B");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size(2048), "2.00 KB");
    }

    #[test]
    fn test_format_size_avatar_limit() {
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "preset", "presets"), "1 preset");
        assert_eq!(format_count(0, "preset", "presets"), "0 presets");
    }

    #[test]
    fn test_swatch_contains_hex() {
        assert!(swatch(255, 107, 107).ends_with("#ff6b6b"));
    }
}
