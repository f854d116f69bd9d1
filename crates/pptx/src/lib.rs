//! PPTX (OOXML) deck emitter.
//!
//! Implements the [`pitch_core::DeckEmitter`] contract by assembling a
//! presentationml package: a ZIP container holding the content-types
//! manifest, relationship parts, a theme generated from the
//! [`pitch_core::ThemeSpec`], and one slide plus notes-slide part per
//! compiled slide record.

mod parts;
mod writer;
mod xml;

pub use writer::PptxEmitter;
