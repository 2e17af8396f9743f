//! Library for reflowing terminal text.
//!
//! [`wrap`] rewraps free-form text such as command-line help, usage text or
//! log messages to a column width. Single newlines are treated as soft wraps
//! and rejoined, while blank lines, indentation changes, hanging indents,
//! quoted spans and text fenced with triple backticks survive the reflow.
//!
//! The pipeline runs in stages, each consuming the previous stage's output:
//! [`split_verbatim_blocks`], [`split_blank_lines`], [`build_paragraphs`],
//! then [`assemble`], which wraps each paragraph with [`wrap_paragraph`].
//!
//! ```
//! let text = "Ordinary paragraphs can be freely wrapped along word boundaries.\n\
//!             The resulting lines can be no longer than the specified wrap width.";
//! assert_eq!(
//!     termreflow::wrap_to(text, 40),
//!     "Ordinary paragraphs can be freely\n\
//!      wrapped along word boundaries. The\n\
//!      resulting lines can be no longer than\n\
//!      the specified wrap width."
//! );
//! ```

#[macro_use]
mod macros;

mod assemble;
mod blocks;
mod indent;
mod inhibit;
pub mod io;
mod paragraph;
mod space;
mod width;
mod wrap;

pub use assemble::assemble;
pub use blocks::{Block, FENCE, split_blank_lines, split_verbatim_blocks};
pub use indent::{IndentationProfile, LOOKAHEAD};
pub use inhibit::BreakInhibitor;
pub use paragraph::{Paragraph, build_paragraphs};
pub use width::{TerminalWidth, UNBOUNDED_WIDTH, WidthProvider, resolve_width};
pub use wrap::{render_paragraph, wrap_paragraph};

/// Reflow `text` to exactly `width` columns.
///
/// This is the deterministic core of [`wrap`]: it never consults the terminal.
/// Any input is accepted; unbalanced fences or quotes only change where lines
/// may break.
#[must_use]
pub fn wrap_to(text: &str, width: usize) -> String {
    let blocks = split_verbatim_blocks(text);
    log::trace!("split input into {} fence blocks", blocks.len());
    let blocks = split_blank_lines(blocks);
    log::trace!("split prose into {} blocks", blocks.len());
    let paragraphs = build_paragraphs(&blocks);
    log::trace!("reconstructed {} paragraphs", paragraphs.len());
    assemble(&paragraphs, width)
}

/// Reflow `text`, resolving an unset `width` through `provider`.
#[must_use]
pub fn wrap_with<P: WidthProvider + ?Sized>(
    text: &str,
    width: Option<usize>,
    provider: &P,
) -> String {
    wrap_to(text, resolve_width(width, provider))
}

/// Reflow `text` to `width`, or to the terminal width when `width` is `None`.
///
/// Without a terminal the text is not wrapped at all, only normalised.
///
/// # Examples
///
/// ```
/// let help = "Usage:\n  tool [OPTIONS]\n\nOptions:\n  -w  Target\n      width";
/// assert_eq!(
///     termreflow::wrap(help, Some(80)),
///     "Usage:\n  tool [OPTIONS]\n\nOptions:\n  -w  Target width"
/// );
/// ```
#[must_use]
pub fn wrap(text: &str, width: Option<usize>) -> String {
    wrap_with(text, width, &TerminalWidth)
}
