//! Whitespace classification shared by every stage.
//!
//! Besides Unicode `White_Space`, the ASCII information separators
//! U+001C..=U+001F count as whitespace, so they indent, separate words and get
//! trimmed like spaces do.

/// Whether `c` counts as whitespace when measuring indentation and breaking.
#[must_use]
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim [`is_space`] characters from both ends of `text`.
#[must_use]
pub(crate) fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Trim [`is_space`] characters from the end of `text`.
#[must_use]
pub(crate) fn trim_space_end(text: &str) -> &str {
    text.trim_end_matches(is_space)
}
