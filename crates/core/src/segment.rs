//! Slide segmentation: splitting the raw document into per-slide blocks.

/// The literal separator between two slides' source text: a horizontal
/// rule token at the start of a line.
pub const BLOCK_DELIMITER: &str = "\n---";

/// The trimmed, non-empty lines belonging to one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Lines in source order.
    pub lines: Vec<String>,
}

impl RawBlock {
    fn from_fragment(fragment: &str) -> Self {
        Self {
            lines: fragment
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Split the document on the block delimiter, preserving order.
///
/// Fragments that are empty after trimming produce no block. A document
/// without any delimiter yields exactly one block; a document with no
/// non-empty fragment yields none. Content is never an error.
pub fn segment(text: &str) -> Vec<RawBlock> {
    text.split(BLOCK_DELIMITER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(RawBlock::from_fragment)
        .collect()
}
