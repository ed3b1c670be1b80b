//! The fixed set of characters dropped after character-map substitution.

/// Structural and punctuation characters removed from every substituted
/// fragment: `@ # : _ ~ . $ ^ ( ) ! * + ' " \ -`.
pub const DISALLOWED_CHARS: &[char] = &[
    '@', '#', ':', '_', '~', '.', '$', '^', '(', ')', '!', '*', '+', '\'', '"', '\\', '-',
];

/// Whether `ch` is stripped from substituted text.
pub fn is_disallowed(ch: char) -> bool {
    DISALLOWED_CHARS.contains(&ch)
}

/// Removes every disallowed character from `text`.
///
/// ```rust
/// use canonical::remove_disallowed;
///
/// assert_eq!(remove_disallowed("A81758FFFE04@E4F5"), "A81758FFFE04E4F5");
/// assert_eq!(remove_disallowed("(c)"), "c");
/// ```
pub fn remove_disallowed(text: &str) -> String {
    text.chars().filter(|ch| !is_disallowed(*ch)).collect()
}
