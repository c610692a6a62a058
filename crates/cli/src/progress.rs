//! Progress indicators for directory scans

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar for checking `total` files
///
/// Hidden when `visible` is false or stderr is not a terminal, so piped
/// output stays clean.
pub fn file_progress(total: u64, visible: bool) -> ProgressBar {
    if !visible || !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▓░");
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Finish a progress bar with a success message
pub fn finish_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✓ {}", message));
}

/// Finish a progress bar with an error message
pub fn finish_error(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✗ {}", message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_progress() {
        let pb = file_progress(10, false);
        pb.inc(4);
        finish_success(&pb, "done");
        assert!(pb.is_finished());
    }
}
