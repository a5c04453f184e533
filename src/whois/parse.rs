//! Line-level parsing of registry responses.

use crate::config::MAX_LABEL_LENGTH;

/// Line prefixes registries use for banners and legal text.
const COMMENT_MARKERS: &[&str] = &["%", "#", ">>>"];

fn is_comment(line: &str) -> bool {
    COMMENT_MARKERS.iter().any(|marker| line.starts_with(marker))
}

/// Splits one response line into a trimmed `(label, value)` pair.
///
/// Returns `None` for blank lines, comment lines, lines without a `:` and lines
/// whose label is empty or too long to be a field name. The value may be empty.
pub(crate) fn split_field(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return None;
    }
    let (label, value) = line.split_once(':')?;
    let label = label.trim();
    if label.is_empty() || label.chars().count() > MAX_LABEL_LENGTH {
        return None;
    }
    Some((label, value.trim()))
}

/// All `(label, value)` pairs of a response, in line order.
pub(crate) fn fields(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().filter_map(split_field)
}
