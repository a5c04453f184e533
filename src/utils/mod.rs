//! Small shared helpers.
//!
//! This module provides:
//! - Static regex compilation
//! - Log-safe previews of registry text

use regex::Regex;

/// Maximum preview length in characters for registry text quoted in log lines
pub const MAX_LOG_PREVIEW_CHARS: usize = 120;

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
pub(crate) fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Returns at most `MAX_LOG_PREVIEW_CHARS` characters of `text` on a single line.
///
/// Newlines are replaced so a multi-line registry banner cannot forge log entries.
pub(crate) fn log_preview(text: &str) -> String {
    let mut preview: String = text
        .chars()
        .take(MAX_LOG_PREVIEW_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if text.chars().count() > MAX_LOG_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
