//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// Used for the patterns the segmenters match on every call, such as the
/// blank-line runs that separate prose blocks, so each is compiled only once.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RUN_RE: LazyLock<Regex> = termreflow::lazy_regex!(r"\n{2,}", "newline runs");
/// assert_eq!(RUN_RE.find_iter("a\n\nb\nc\n\n\nd").count(), 2);
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
