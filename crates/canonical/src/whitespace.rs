//! Whitespace trimming and collapsing.
//!
//! The two steps use different classes:
//! - Trimming strips Unicode whitespace (`char::is_whitespace`) from both ends
//! - Collapsing only joins runs of ASCII `[\t\n\f\r ]`; interior no-break
//!   spaces, vertical tabs and other Unicode spaces are kept as text
//!
//! # Examples
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  hello   world  ", "-"), "hello-world");
//! assert_eq!(collapse_whitespace("hello\t\n world", "_"), "hello_world");
//! ```

/// Whether `ch` belongs to a collapsible whitespace run.
pub fn is_collapsible_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Trims `text` and replaces every run of ASCII whitespace with one
/// `separator`.
///
/// Returns an empty string for empty or whitespace-only input.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("", "-"), "");
/// assert_eq!(collapse_whitespace("   \n\t   ", "-"), "");
/// assert_eq!(collapse_whitespace("\u{00A0}hello\u{00A0}world ", "-"), "hello\u{00A0}world");
/// ```
pub fn collapse_whitespace(text: &str, separator: &str) -> String {
    let trimmed = text.trim();
    let mut collapsed = String::with_capacity(trimmed.len());
    let mut pending = false;

    for ch in trimmed.chars() {
        if is_collapsible_whitespace(ch) {
            pending = true;
            continue;
        }
        if pending {
            collapsed.push_str(separator);
            pending = false;
        }
        collapsed.push(ch);
    }
    collapsed
}
