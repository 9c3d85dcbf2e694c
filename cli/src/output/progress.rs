//! Progress indicators using indicatif

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

/// Style from `template`, or the plain spinner style if it does not parse.
fn styled(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Spinner shown while waiting on a synchronous launcher request.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(styled("{spinner:.cyan} {msg}").tick_strings(TICKS));
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a checkmark on the left.
pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    pb.set_style(styled("{prefix} {msg}"));
    pb.set_prefix("✓");
    pb.finish_with_message(msg.to_string());
}

/// Remove a spinner without leaving a line behind.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
