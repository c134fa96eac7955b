//! Plain-text insertion primitive
//!
//! Every piece of dynamic text coming from the backend (authors, branch
//! names, raw action strings, unparseable timestamps) passes through here
//! before it reaches a terminal cell. Control characters are stripped so
//! untrusted input can never move the cursor, recolor cells, or smuggle
//! escape sequences into the buffer.

/// Sanitize a dynamic value for display as plain text
///
/// Removes all control characters (including tabs and newlines; feed rows
/// are single-line). Printable Unicode passes through unchanged.
pub fn plain(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}
