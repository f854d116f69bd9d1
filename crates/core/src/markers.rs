//! Marker grammar for structural tokens embedded in pitch-script lines.
//!
//! Source documents tag lines with bracketed markers such as `[Screen]`
//! or `[Note]`. Rather than scattering substring tests through the
//! classifier, the grammar is an explicit ordered token table mapping
//! each marker string to the field role it declares.

/// The field role a marker token declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// Sets the slide title from the text after the colon.
    Title,
    /// Sets the slide subtitle from the text after the colon.
    Subtitle,
    /// Switches the rest of the block to presenter-only notes.
    NoteSection,
    /// A generic labeled screen field, appended to the bullets.
    ScreenField,
}

/// Ordered token-prefix table mapping marker strings to field roles.
///
/// Lookup is first-match containment in table order, so the note marker
/// takes precedence over everything and the specific title/subtitle
/// markers take precedence over the generic `[Screen]` field marker.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    entries: Vec<(String, MarkerRole)>,
}

impl MarkerTable {
    /// Build a table from `(token, role)` pairs, matched in the given order.
    pub fn new(entries: Vec<(String, MarkerRole)>) -> Self {
        Self { entries }
    }

    /// Find the first marker token contained in `line`, returning the
    /// token and its role.
    pub fn lookup<'a>(&'a self, line: &str) -> Option<(&'a str, MarkerRole)> {
        self.entries
            .iter()
            .find(|(token, _)| line.contains(token.as_str()))
            .map(|(token, role)| (token.as_str(), *role))
    }
}

impl Default for MarkerTable {
    /// The document convention of the pitch scripts this compiler was
    /// written for: bilingual title/subtitle markers, a sticky note
    /// marker, and a generic screen-field marker.
    fn default() -> Self {
        Self::new(vec![
            ("[Note]".to_string(), MarkerRole::NoteSection),
            ("[Screen] 标题".to_string(), MarkerRole::Title),
            ("[Screen] Title".to_string(), MarkerRole::Title),
            ("[Screen] 副标题".to_string(), MarkerRole::Subtitle),
            ("[Screen] Subtitle".to_string(), MarkerRole::Subtitle),
            ("[Screen]".to_string(), MarkerRole::ScreenField),
        ])
    }
}
