//! Resolution of the target width when the caller leaves it unset.
//!
//! The wrapping core is a pure function of text and width. Looking up the
//! terminal is kept behind [`WidthProvider`] so callers and tests can inject a
//! fixed answer.

use std::env;

/// Width used when no terminal width can be determined.
///
/// Large enough that no line is ever broken, leaving only the structural
/// normalisation of blank lines and indentation.
pub const UNBOUNDED_WIDTH: usize = 1_000_000;

/// Source of the terminal column count.
pub trait WidthProvider {
    /// Number of columns available, or `None` when unknown.
    fn columns(&self) -> Option<usize>;
}

impl<F> WidthProvider for F
where
    F: Fn() -> Option<usize>,
{
    fn columns(&self) -> Option<usize> {
        self()
    }
}

/// Reads `COLUMNS`, then asks the terminal attached to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthProvider for TerminalWidth {
    fn columns(&self) -> Option<usize> {
        columns_from_env(env::var("COLUMNS").ok().as_deref()).or_else(|| {
            terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| usize::from(w))
        })
    }
}

/// Parse a `COLUMNS` value, accepting only positive integers.
fn columns_from_env(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Resolve the width to wrap at.
///
/// An explicit `width` wins; otherwise `provider` is queried once and
/// [`UNBOUNDED_WIDTH`] is used if it has no answer.
///
/// # Examples
///
/// ```
/// use termreflow::{UNBOUNDED_WIDTH, resolve_width};
///
/// assert_eq!(resolve_width(Some(72), &|| Some(100_usize)), 72);
/// assert_eq!(resolve_width(None, &|| Some(100_usize)), 100);
/// assert_eq!(resolve_width(None, &|| None::<usize>), UNBOUNDED_WIDTH);
/// ```
#[must_use]
pub fn resolve_width<P: WidthProvider + ?Sized>(width: Option<usize>, provider: &P) -> usize {
    if let Some(width) = width {
        return width;
    }
    match provider.columns() {
        Some(columns) => {
            log::debug!("wrapping at detected terminal width {columns}");
            columns
        }
        None => {
            log::debug!("no terminal width available; wrapping unbounded");
            UNBOUNDED_WIDTH
        }
    }
}
