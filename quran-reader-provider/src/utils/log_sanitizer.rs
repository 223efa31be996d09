//! Log sanitization utilities
//!
//! Section responses carry the full text of every item, which makes raw bodies
//! unreadable in debug logs. Bodies are cut to a fixed number of characters and
//! newlines are flattened so one response stays on one log line.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Counts characters rather than bytes, so multi-byte scripts are never split.
/// Newlines are replaced with `\n` escapes.
pub fn truncate_for_log(s: &str) -> String {
    let flattened = s.replace('\r', "").replace('\n', "\\n");
    match flattened.char_indices().nth(TRUNCATE_LIMIT) {
        None => flattened,
        Some((cut, _)) => format!(
            "{}... [truncated, total {} chars]",
            &flattened[..cut],
            flattened.chars().count()
        ),
    }
}
