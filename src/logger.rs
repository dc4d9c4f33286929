//! Logging utilities with colored output and deployment banners.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - banner helpers used by the deployment pipeline
//!
//! # Example
//!
//! ```ignore
//! log!("config"; "loaded {}", path.display());
//! debug!("exec"; "sh -c {command}");
//!
//! section("🚀 PORTFOLIO DEPLOYMENT");
//! step_started("Checking git status");
//! ```

use owo_colors::{OwoColorize, Stream::Stdout, Style};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose or `[log] verbose`)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Width of the `=` rule framing every banner.
const RULE_WIDTH: usize = 60;

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = format!("[{module}]");
    let style = prefix_style(&module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{} {message}", prefix.if_supports_color(Stdout, |t| t.style(style))).ok();
    stdout.flush().ok();
}

/// Color of a module prefix based on module type
#[inline]
fn prefix_style(module_lower: &str) -> Style {
    let style = Style::new().bold();
    match module_lower {
        "exec" => style.bright_blue(),
        "deploy" => style.bright_green(),
        _ => style.bright_yellow(),
    }
}

/// Print `line`, styled only when stdout takes colors (honours `--color`).
fn print_styled(line: &str, style: Style) {
    println!("{}", line.if_supports_color(Stdout, |t| t.style(style)));
}

// ============================================================================
// Banners
// ============================================================================

/// The `=` rule used above and below banner titles.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title of the closing banner.
pub const COMPLETE_TITLE: &str = "✨ DEPLOYMENT COMPLETE!";

pub fn step_started_line(description: &str) -> String {
    format!("🔄 {description}")
}

pub fn step_succeeded_line(description: &str) -> String {
    format!("✅ {description} - SUCCESS")
}

pub fn step_failed_line(description: &str) -> String {
    format!("❌ {description} - FAILED")
}

pub fn error_detail_line(stderr_text: &str) -> String {
    format!("Error: {stderr_text}")
}

pub fn warning_line(message: &str) -> String {
    format!("⚠️  {message}")
}

/// Print a framed title preceded by a blank line.
pub fn section(title: &str) {
    section_styled(title, Style::new().bold());
}

fn section_styled(title: &str, style: Style) {
    println!();
    print_styled(&rule(), Style::new().dimmed());
    print_styled(title, style);
    print_styled(&rule(), Style::new().dimmed());
}

/// Banner printed before a step's command runs.
pub fn step_started(description: &str) {
    section(&step_started_line(description));
}

/// Print a step's captured stdout (skipped when empty).
pub fn step_output(stdout_text: &str) {
    if !stdout_text.is_empty() {
        println!("{stdout_text}");
    }
}

/// Line printed after a step exited with status zero.
pub fn step_succeeded(description: &str) {
    print_styled(&step_succeeded_line(description), Style::new().green());
}

/// Lines printed after a step exited with a non-zero status.
pub fn step_failed(description: &str, stderr_text: &str) {
    print_styled(&step_failed_line(description), Style::new().red().bold());
    println!("{}", error_detail_line(stderr_text));
}

/// A standalone warning line preceded by a blank line.
pub fn warning(message: &str) {
    println!();
    print_styled(&warning_line(message), Style::new().yellow());
}

/// Body of the closing banner: the notes between blank lines, then a rule.
pub fn completion_body(notes: &[&str]) -> String {
    format!("\n{}\n\n{}\n", notes.join("\n"), rule())
}

/// Closing banner of a successful deployment.
pub fn completion(notes: &[&str]) {
    section_styled(COMPLETE_TITLE, Style::new().green().bold());
    println!("{}", completion_body(notes));
}

// ============================================================================
// Tests
// ============================================================================
