//! Break inhibition inside quoted spans.
//!
//! The wrapper must not split text quoted with `"`, `` ` `` or `'`, so that a
//! quoted command can be copied out of the terminal in one piece. Double
//! quotes and backticks always toggle. A single quote only opens a span when
//! it follows a space, and an open span closes at the first non-alphanumeric
//! character that directly follows a `'`. This keeps `it's` from opening a
//! span while `'word'` still closes after the word. A `'` at the very start
//! looks back at the last character of the text instead, so text that begins
//! with `'` and ends with a space opens a span. It is a heuristic, not a
//! parser.

/// Tracks whether the scan position lies inside a quoted span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakInhibitor {
    double: bool,
    backtick: bool,
    single: bool,
}

impl BreakInhibitor {
    /// Create an inhibitor outside of any quoted span.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine over the character at `index`.
    ///
    /// Indices outside `chars` leave the state unchanged.
    pub fn update(&mut self, chars: &[char], index: usize) {
        let Some(&ch) = chars.get(index) else {
            return;
        };
        let prev = index.checked_sub(1).map(|i| chars[i]);

        match ch {
            '"' => self.double = !self.double,
            '`' => self.backtick = !self.backtick,
            _ => {}
        }

        if self.single && !ch.is_alphanumeric() && prev == Some('\'') {
            self.single = false;
        }

        let opening_prev = if index == 0 { chars.last().copied() } else { prev };
        if !self.single && ch == '\'' && index + 1 < chars.len() && opening_prev == Some(' ') {
            self.single = true;
        }
    }

    /// Whether a break at the current position must be suppressed.
    #[must_use]
    pub fn active(&self) -> bool {
        self.double || self.backtick || self.single
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Run the inhibitor over `text` and report `active()` after each character.
    fn trace(text: &str) -> Vec<bool> {
        let chars: Vec<char> = text.chars().collect();
        let mut inhibitor = BreakInhibitor::new();
        (0..chars.len())
            .map(|i| {
                inhibitor.update(&chars, i);
                inhibitor.active()
            })
            .collect()
    }

    fn active_after(text: &str) -> bool {
        trace(text).last().copied().unwrap_or(false)
    }

    #[test]
    fn starts_inactive() {
        assert!(!BreakInhibitor::new().active());
    }

    #[rstest]
    #[case("say \"hi", true)]
    #[case("say \"hi\"", false)]
    #[case("run `ls", true)]
    #[case("run `ls -la`", false)]
    #[case("it's", false)]
    #[case("don't stop", false)]
    #[case("a 'quoted", true)]
    #[case("a 'quoted' x", false)]
    #[case("a 'quoted',", false)]
    fn tracks_quote_state(#[case] text: &str, #[case] active: bool) {
        assert_eq!(active_after(text), active);
    }

    #[test]
    fn single_quote_stays_open_through_closing_quote() {
        let states = trace("a 'b' c");
        assert_eq!(
            states,
            vec![false, false, true, true, true, false, false],
            "the span closes on the character after the closing quote"
        );
    }

    #[test]
    fn single_quote_at_end_does_not_open() {
        assert!(!active_after("trailing '"));
    }

    #[test]
    fn single_quote_at_start_looks_back_at_last_character() {
        assert!(!active_after("'quoted words"));
        assert!(active_after("'quoted words "));
    }

    #[test]
    fn single_quote_at_start_never_closes_on_wrap_around() {
        let states = trace("'a b' ");
        assert_eq!(states, vec![true, true, true, true, true, false]);
    }

    #[test]
    fn apostrophe_inside_single_quote_keeps_span_open() {
        assert!(active_after("x 'it's still"));
    }

    #[test]
    fn quote_kinds_are_independent() {
        let states = trace("\"a `b\" c`");
        assert!(states[..8].iter().skip(1).all(|&s| s));
        assert!(!states[8]);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut inhibitor = BreakInhibitor::new();
        inhibitor.update(&['"'], 3);
        assert!(!inhibitor.active());
    }
}
