//! Paragraph reconstruction from segmented blocks.
//!
//! Lines inside a prose block are rejoined into one paragraph while their
//! indentation stays stable, so text that was soft-wrapped in source code is
//! wrapped afresh. A change of indentation starts a new paragraph, which keeps
//! an intentional dedent as a hard break even without a blank line.

use crate::{blocks::Block, indent::IndentationProfile, space::trim_space};

/// A run of logically joined text and its indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Indentation of the first and continuation lines.
    pub indentation: IndentationProfile,
    /// Joined text; raw and newline-bearing for verbatim paragraphs.
    pub text: String,
    /// Whether the paragraph must be emitted unchanged.
    pub is_verbatim: bool,
}

impl Paragraph {
    fn from_line(line: &str) -> Self {
        Self {
            indentation: IndentationProfile::new(line),
            text: trim_space(line).to_string(),
            is_verbatim: false,
        }
    }

    fn from_verbatim(block: &Block) -> Self {
        Self {
            indentation: IndentationProfile::new(&block.text).shifted(block.indentation),
            text: block.text.clone(),
            is_verbatim: true,
        }
    }

    /// Whether `next` continues this paragraph rather than starting a new one.
    fn continues_with(&self, next: &Self) -> bool {
        self.indentation.for_next_line == next.indentation.for_line
    }

    fn append(&mut self, text: &str) {
        self.text.push(' ');
        self.text.push_str(text);
    }
}

/// Turn segmented blocks into paragraphs.
///
/// Verbatim blocks become one verbatim paragraph each. Every prose block
/// starts a new paragraph; its following lines are appended with a single
/// space while the previous line's continuation indentation matches their
/// own indentation.
///
/// # Examples
///
/// ```
/// use termreflow::{Block, build_paragraphs};
///
/// let paragraphs = build_paragraphs(&[Block::prose("one\ntwo\n  three")]);
/// let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
/// assert_eq!(texts, ["one two", "three"]);
/// ```
#[must_use]
pub fn build_paragraphs(blocks: &[Block]) -> Vec<Paragraph> {
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    for block in blocks {
        if block.is_verbatim {
            paragraphs.push(Paragraph::from_verbatim(block));
            continue;
        }

        for (i, line) in block.text.split('\n').enumerate() {
            let candidate = Paragraph::from_line(line);
            match paragraphs.last_mut() {
                Some(current) if i > 0 && current.continues_with(&candidate) => {
                    current.append(&candidate.text);
                }
                _ => paragraphs.push(candidate),
            }
        }
    }
    paragraphs
}
