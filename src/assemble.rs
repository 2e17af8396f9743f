//! Stitching rendered paragraphs into the final text.
//!
//! Fences split the surrounding prose, and the blank-line segmenter turns the
//! newline next to a fence into an empty paragraph. Those empty lines are
//! merged into their neighbour so fences never add blank lines of their own.

use crate::{paragraph::Paragraph, wrap::render_paragraph};

/// Merge `first` onto the last emitted line, removing that line from `lines`.
fn merge_onto_last(lines: &mut Vec<String>, first: &mut String) {
    if let Some(mut last) = lines.pop() {
        last.push_str(first);
        *first = last;
    }
}

/// Render `paragraphs` at `width` and join the result with newlines.
///
/// # Examples
///
/// ```
/// use termreflow::{Block, assemble, build_paragraphs};
///
/// let paragraphs = build_paragraphs(&[Block::prose("a"), Block::prose(""), Block::prose("b")]);
/// assert_eq!(assemble(&paragraphs, 80), "a\n\nb");
/// ```
#[must_use]
pub fn assemble(paragraphs: &[Paragraph], width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_verbatim = false;

    for paragraph in paragraphs {
        let mut rendered = render_paragraph(paragraph, width);
        if let Some(first) = rendered.first_mut() {
            if previous_verbatim && first.is_empty() {
                merge_onto_last(&mut lines, first);
            }
            if paragraph.is_verbatim && lines.last().is_some_and(String::is_empty) {
                merge_onto_last(&mut lines, first);
            }
        }
        lines.extend(rendered);
        previous_verbatim = paragraph.is_verbatim;
    }

    log::trace!("assembled {} paragraphs into {} lines", paragraphs.len(), lines.len());
    lines.join("\n")
}
