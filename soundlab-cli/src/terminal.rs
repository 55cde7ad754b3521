// ============================================================================
// soundlab-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Section headers, aligned status lines, success and error messages, and a
// spinner shown while ffmpeg runs. Results go to stdout; errors and the
// spinner go to stderr so piped output stays clean.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";

    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    pub const STATUS_INDENT: &str = "  ";
    pub const LABEL_WIDTH: usize = 15;
}

pub fn print_section(title: &str) {
    println!();
    println!(
        "{}",
        style(format!(
            "{}{}{}",
            styling::SECTION_PREFIX,
            title.to_uppercase(),
            styling::SECTION_SUFFIX
        ))
        .cyan()
        .bold()
    );
}

/// Formats `label: value` with the label padded to a fixed column.
pub fn format_status(label: &str, value: &str) -> String {
    let padding = styling::LABEL_WIDTH.saturating_sub(label.len()).max(1);
    format!(
        "{}{}:{}{}",
        styling::STATUS_INDENT,
        label,
        " ".repeat(padding),
        value
    )
}

pub fn print_status(label: &str, value: &str, highlight: bool) {
    if highlight {
        let line = format_status(label, "");
        println!("{}{}", line, style(value).bold());
    } else {
        println!("{}", format_status(label, value));
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", style(styling::SUCCESS_SYMBOL).green().bold(), message);
}

pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    eprintln!("{} {}", styling::ERROR_SYMBOL, style(title).red().bold());
    eprintln!("  Message:    {message}");
    if let Some(suggestion) = suggestion {
        eprintln!("  Suggestion: {suggestion}");
    }
}

/// Starts a spinner on stderr. Hidden automatically when stderr is not a
/// terminal.
pub fn start_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
