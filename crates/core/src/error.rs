//! Error types for pitch-script compilation and deck emission.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling a pitch script or emitting a deck.
///
/// Segmentation, classification, and layout assignment are total over
/// well-formed text and never fail; only the I/O-facing steps do.
#[derive(Error, Debug)]
pub enum Error {
    /// The source document could not be opened or read. Fatal.
    #[error("Failed to read source document {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured theme asset (logo or background image) is absent.
    /// Non-fatal: callers fall back to a solid fill / omitted logo.
    #[error("Asset not found: {0}")]
    AssetMissing(PathBuf),

    /// The output path is unwritable or the renderer failed. Fatal.
    #[error("Deck emission failed: {0}")]
    Emission(String),

    /// ZIP container error while writing the output package.
    #[error("ZIP error: {0}")]
    Zip(String),

    /// A color literal in the theme configuration is not `#RRGGBB`.
    #[error("Invalid color literal: {0}")]
    InvalidColor(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
