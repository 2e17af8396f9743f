//! Segmentation of raw input into verbatim and prose blocks.
//!
//! Text is first split on [`FENCE`] into alternating prose and verbatim
//! blocks. Prose blocks are then split on runs of blank lines so that each
//! resulting block holds text separated by single newlines only.

use std::sync::LazyLock;

use regex::Regex;

use crate::space::trim_space_end;

/// Delimiter that opens and closes a verbatim block.
pub const FENCE: &str = "```";

static NEWLINE_RUN_RE: LazyLock<Regex> =
    lazy_regex!(r"\n{2,}", "newline run pattern should compile");

/// A span of input that is either prose or fenced verbatim text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Text of the block without its fences.
    pub text: String,
    /// Whether the block was enclosed by fences.
    pub is_verbatim: bool,
    /// Trailing spaces on the last line of the preceding block.
    ///
    /// Only meaningful for verbatim blocks; prose blocks keep zero.
    pub indentation: usize,
}

impl Block {
    /// Create a prose block.
    #[must_use]
    pub fn prose(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a verbatim block that inherits `indentation` columns.
    #[must_use]
    pub fn verbatim(text: impl Into<String>, indentation: usize) -> Self {
        Self {
            text: text.into(),
            is_verbatim: true,
            indentation,
        }
    }
}

/// Count the trailing space characters (not tabs) on the last line of `text`.
fn trailing_spaces(text: &str) -> usize {
    let last_line = text.rsplit('\n').next().unwrap_or_default();
    last_line.len() - last_line.trim_end_matches(' ').len()
}

/// Split `text` on [`FENCE`] into alternating prose and verbatim blocks.
///
/// Blocks at odd positions are verbatim, so an unbalanced trailing fence
/// leaves the remainder verbatim. Joining the block texts with [`FENCE`]
/// reproduces the input.
///
/// # Examples
///
/// ```
/// use termreflow::split_verbatim_blocks;
///
/// let blocks = split_verbatim_blocks("run  ```cargo test``` now");
/// assert_eq!(blocks.len(), 3);
/// assert!(blocks[1].is_verbatim);
/// assert_eq!(blocks[1].indentation, 2);
/// ```
#[must_use]
pub fn split_verbatim_blocks(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for (i, segment) in text.split(FENCE).enumerate() {
        if i % 2 == 1 {
            let indentation = blocks.last().map_or(0, |prev| trailing_spaces(&prev.text));
            blocks.push(Block::verbatim(segment, indentation));
        } else {
            blocks.push(Block::prose(segment));
        }
    }
    blocks
}

/// Split prose blocks on runs of two or more newlines.
///
/// Each run ends the current block, with trailing whitespace removed, and
/// adds one empty block per newline beyond the first so that the number of
/// blank lines can be reproduced later. Verbatim blocks pass through.
/// An empty tail after the last run adds nothing.
#[must_use]
pub fn split_blank_lines(blocks: Vec<Block>) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        if block.is_verbatim {
            out.push(block);
            continue;
        }

        let text = block.text.as_str();
        let mut start = 0;
        for run in NEWLINE_RUN_RE.find_iter(text) {
            out.push(Block::prose(trim_space_end(&text[start..run.start()])));
            out.extend((1..run.len()).map(|_| Block::prose("")));
            start = run.end();
        }
        if start < text.len() {
            out.push(Block::prose(trim_space_end(&text[start..])));
        }
    }
    out
}
