//! The deck emitter boundary.
//!
//! The compiler owns no rendering: it hands the ordered `(record, role)`
//! sequence and the theme constants to a [`DeckEmitter`] collaborator,
//! which owns glyphs, images, and the output container format.

use std::path::Path;

use crate::error::Result;
use crate::types::{LayoutRole, SlideRecord, ThemeSpec};

/// Opaque handle to a slide added to an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideId(usize);

impl SlideId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Contract the compiler drives to render a deck.
pub trait DeckEmitter {
    /// Start a deck using the given theme constants.
    fn begin_deck(&mut self, theme: &ThemeSpec) -> Result<()>;

    /// Add one slide, rendered with the template for `role`.
    fn add_slide(&mut self, role: LayoutRole, record: &SlideRecord) -> Result<SlideId>;

    /// Attach speaker notes to a slide. Called exactly once per slide,
    /// with an empty sequence yielding empty notes text rather than a
    /// skipped call.
    fn set_notes(&mut self, slide: SlideId, notes: &[String]) -> Result<()>;

    /// Write the finished deck to `output`.
    fn finalize(&mut self, output: &Path) -> Result<()>;
}

/// Drive an emitter over a compiled deck and write the result.
pub fn emit_deck(
    emitter: &mut dyn DeckEmitter,
    theme: &ThemeSpec,
    deck: &[(SlideRecord, LayoutRole)],
    output: &Path,
) -> Result<()> {
    emitter.begin_deck(theme)?;
    for (record, role) in deck {
        let slide = emitter.add_slide(*role, record)?;
        emitter.set_notes(slide, &record.notes)?;
    }
    emitter.finalize(output)
}
