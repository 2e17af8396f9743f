//! Indentation inference for a single line of text.
//!
//! A line carries two indentation widths: the column its own text starts at,
//! and the column a soft-wrapped continuation should start at. The second one
//! is found from the last run of two or more whitespace characters in the
//! first [`LOOKAHEAD`] code points, which is how help texts lay out a hanging
//! gutter:
//!
//! ```text
//!   --width N    Target width.
//!                Continuation lines align here.
//! ```

use crate::space::is_space;

/// Number of code points inspected from the start of a line.
pub const LOOKAHEAD: usize = 80;

/// The pair of indentation widths inferred from the start of a line.
///
/// `for_next_line` is usually at least `for_line`, but nothing enforces it:
/// a whitespace-only line reports `for_line == 0` together with a
/// `for_next_line` past its last space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentationProfile {
    /// Column where the current line's text starts.
    pub for_line: usize,
    /// Column a continuation of this line should start at.
    pub for_next_line: usize,
}

impl IndentationProfile {
    /// Infer the indentation profile of `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use termreflow::IndentationProfile;
    ///
    /// let profile = IndentationProfile::new("  -w, --width  Target width");
    /// assert_eq!(profile.for_line, 2);
    /// assert_eq!(profile.for_next_line, 15);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let window: Vec<char> = text.chars().take(LOOKAHEAD).collect();
        let for_line = window
            .iter()
            .position(|&c| c == '\n' || !is_space(c))
            .unwrap_or(0);

        let mut for_next_line = for_line;
        for i in for_line.max(1)..window.len() {
            if is_space(window[i]) && is_space(window[i - 1]) {
                for_next_line = i + 1;
            }
        }

        Self {
            for_line,
            for_next_line,
        }
    }

    /// Shift the first-line indentation right by `columns`.
    #[must_use]
    pub fn shifted(self, columns: usize) -> Self {
        Self {
            for_line: self.for_line + columns,
            ..self
        }
    }

    /// Indentation for the output line at `line_index` of a wrapped paragraph.
    #[must_use]
    pub fn for_output_line(&self, line_index: usize) -> usize {
        if line_index == 0 {
            self.for_line
        } else {
            self.for_next_line
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("plain text", 0, 0)]
    #[case("  indented", 2, 2)]
    #[case("  a  b", 2, 5)]
    #[case("  first  -  second", 2, 12)]
    #[case("", 0, 0)]
    #[case("   ", 0, 3)]
    #[case("\n  next", 0, 3)]
    #[case("\tx", 1, 1)]
    #[case("\u{1f}\u{1f}  word", 4, 4)]
    #[case("a\u{1e}\u{1e}b", 0, 3)]
    fn infers_profile(#[case] text: &str, #[case] for_line: usize, #[case] for_next_line: usize) {
        let profile = IndentationProfile::new(text);
        assert_eq!(
            profile,
            IndentationProfile {
                for_line,
                for_next_line
            }
        );
    }

    #[test]
    fn ignores_runs_past_lookahead() {
        let text = format!("{}  gutter", "x".repeat(LOOKAHEAD));
        let profile = IndentationProfile::new(&text);
        assert_eq!(profile.for_next_line, 0);
    }

    #[test]
    fn run_straddling_lookahead_edge_counts() {
        let text = format!("{}  tail", "x".repeat(LOOKAHEAD - 2));
        let profile = IndentationProfile::new(&text);
        assert_eq!(profile.for_next_line, LOOKAHEAD);
    }

    #[test]
    fn leading_whitespace_beyond_lookahead_is_zero() {
        let text = format!("{}x", " ".repeat(LOOKAHEAD + 5));
        let profile = IndentationProfile::new(&text);
        assert_eq!(profile.for_line, 0);
        assert_eq!(profile.for_next_line, LOOKAHEAD);
    }

    #[test]
    fn shifted_moves_only_first_line() {
        let profile = IndentationProfile::new("a  b").shifted(4);
        assert_eq!(profile.for_line, 4);
        assert_eq!(profile.for_next_line, 3);
        assert_eq!(profile.for_output_line(0), 4);
        assert_eq!(profile.for_output_line(3), 3);
    }
}
