//! Pitch-script compiler: turns a narrated pitch document into an
//! ordered sequence of slide records with layout roles.
//!
//! The pipeline is a linear batch transform: the segmenter splits the
//! document into per-slide blocks, the record builder runs the line
//! classifier over each block, and the layout assigner pairs each
//! record with its positional template. Rendering belongs to a
//! [`DeckEmitter`] collaborator.

pub mod builder;
pub mod classify;
pub mod emitter;
pub mod error;
pub mod layout;
pub mod markers;
pub mod normalize;
pub mod segment;
pub mod types;

use std::path::Path;

pub use builder::{build_record, build_records};
pub use classify::{classify_line, LineAction};
pub use emitter::{emit_deck, DeckEmitter, SlideId};
pub use error::{Error, Result};
pub use layout::{assign_roles, role_for};
pub use markers::{MarkerRole, MarkerTable};
pub use normalize::strip_emphasis;
pub use segment::{segment, RawBlock, BLOCK_DELIMITER};
pub use types::{Color, LayoutRole, ParseMode, SlideRecord, ThemeSpec};

/// Compile a document with a custom marker table.
pub fn compile_with(source: &str, markers: &MarkerTable) -> Vec<(SlideRecord, LayoutRole)> {
    let blocks = segment(source);
    let records = build_records(&blocks, markers);
    log::debug!("Compiled {} blocks into {} slide records", blocks.len(), records.len());
    assign_roles(records)
}

/// Compile a document with the default marker table: segment, build
/// records, assign layout roles.
pub fn compile(source: &str) -> Vec<(SlideRecord, LayoutRole)> {
    compile_with(source, &MarkerTable::default())
}

/// Read the UTF-8 source document at `path`.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::DocumentRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PITCH: &str = "\
# Slide 1
[Screen] 标题: SOP Alchemist
[Screen] 副标题: Turn chat into process
* [Screen] Author: Thor
[Note]
* open with the demo
---
# Slide 2
[Screen] Title: The Problem
* knowledge lives in chat logs
* onboarding takes **weeks**
[Note]
* pause here
---
[Screen] Title: Thank You
* questions welcome
";

    #[test]
    fn test_full_pipeline() {
        let deck = compile(PITCH);
        assert_eq!(deck.len(), 3);

        let (opening, role) = &deck[0];
        assert_eq!(*role, LayoutRole::Opening);
        assert_eq!(opening.title.as_deref(), Some("SOP Alchemist"));
        assert_eq!(opening.subtitle.as_deref(), Some("Turn chat into process"));
        assert_eq!(opening.bullets, vec!["Author: Thor"]);
        assert_eq!(opening.notes, vec!["open with the demo"]);

        let (body, role) = &deck[1];
        assert_eq!(*role, LayoutRole::Body);
        assert_eq!(body.title.as_deref(), Some("The Problem"));
        assert_eq!(
            body.bullets,
            vec!["knowledge lives in chat logs", "onboarding takes **weeks**"]
        );
        assert_eq!(body.notes, vec!["pause here"]);

        let (closing, role) = &deck[2];
        assert_eq!(*role, LayoutRole::Closing);
        assert_eq!(closing.title.as_deref(), Some("Thank You"));
    }

    #[test]
    fn test_empty_document_yields_empty_deck() {
        assert!(compile("").is_empty());
        assert!(compile("\n---\n---\n").is_empty());
    }

    #[test]
    fn test_single_block_document() {
        let deck = compile("[Screen] Title: Lone Slide");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].1, LayoutRole::Closing);
    }

    #[test]
    fn test_compile_is_deterministic() {
        assert_eq!(compile(PITCH), compile(PITCH));
    }
}
