//! Greedy line breaking for a single paragraph.
//!
//! Widths are counted in code points. The scan keeps the most recent
//! whitespace outside a quoted span as the break opportunity and breaks there
//! once the line grows past the target width. Without an opportunity the line
//! simply runs long; nothing is ever split mid-token.

use crate::{
    inhibit::BreakInhibitor,
    paragraph::Paragraph,
    space::{is_space, trim_space},
};

fn indented_line(indent: usize, chars: &[char]) -> String {
    let text: String = chars.iter().collect();
    format!("{}{}", " ".repeat(indent), trim_space(&text))
}

/// Wrap a prose paragraph to `width` columns.
///
/// The first line is indented by `for_line` and every continuation line by
/// `for_next_line`. An empty paragraph yields a single empty line.
///
/// # Examples
///
/// ```
/// use termreflow::{Block, build_paragraphs, wrap_paragraph};
///
/// let paragraph = &build_paragraphs(&[Block::prose("one two three four")])[0];
/// assert_eq!(wrap_paragraph(paragraph, 9), ["one two", "three", "four"]);
/// ```
#[must_use]
pub fn wrap_paragraph(paragraph: &Paragraph, width: usize) -> Vec<String> {
    let chars: Vec<char> = paragraph.text.chars().collect();
    let profile = paragraph.indentation;
    let mut inhibitor = BreakInhibitor::new();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut last_split: Option<usize> = None;

    for (i, &ch) in chars.iter().enumerate() {
        let indent = profile.for_output_line(lines.len());
        let current_width = i - start + indent;
        inhibitor.update(&chars, i);

        if current_width > width
            && let Some(split) = last_split.take()
        {
            lines.push(indented_line(indent, &chars[start..split]));
            start = split;
        }

        if is_space(ch) && !inhibitor.active() {
            last_split = Some(i);
        }
    }

    if start < chars.len() {
        let indent = profile.for_output_line(lines.len());
        lines.push(indented_line(indent, &chars[start..]));
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Render a paragraph as output lines.
///
/// Verbatim paragraphs become a single newline-bearing item prefixed by their
/// inherited indentation; prose paragraphs are wrapped with
/// [`wrap_paragraph`].
#[must_use]
pub fn render_paragraph(paragraph: &Paragraph, width: usize) -> Vec<String> {
    if paragraph.is_verbatim {
        let indent = " ".repeat(paragraph.indentation.for_line);
        return vec![format!("{indent}{}", paragraph.text)];
    }
    wrap_paragraph(paragraph, width)
}
