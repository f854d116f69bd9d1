//! Domain types for the compiled slide model and theme configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// The structured result for one slide.
///
/// `bullets` and `notes` partition all non-title/subtitle content lines
/// of the source block; no line lands in both. A record is built up
/// line-by-line by the record builder and treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Audience-visible slide title, if the block declared one.
    pub title: Option<String>,

    /// Audience-visible subtitle, if the block declared one.
    pub subtitle: Option<String>,

    /// Audience-visible content lines, in source order.
    pub bullets: Vec<String>,

    /// Presenter-only content lines, in source order.
    pub notes: Vec<String>,
}

impl SlideRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the record carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.bullets.is_empty()
            && self.notes.is_empty()
    }
}

/// Per-block parse state deciding where bullet lines go.
///
/// This is process state threaded through the per-line fold, not a
/// record field. Every block starts in `Screen`; the note-section
/// marker flips it to `Note` for the remainder of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Bullet lines are audience-visible.
    #[default]
    Screen,
    /// Bullet lines are presenter-only.
    Note,
}

/// The positional template a slide is rendered with.
///
/// Derived purely from the slide's ordinal position in the deck;
/// content is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutRole {
    /// First slide: centered title, subtitle, and logo.
    Opening,
    /// Interior slide: left-aligned title over a bulleted body.
    Body,
    /// Last slide: centered large title and bullets, no placeholders.
    Closing,
}

/// An RGB color, parsed from and serialized as a `#RRGGBB` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex digits without the leading `#`, as used in OOXML.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let parse = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()));
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        format!("#{}", c.to_hex())
    }
}

/// Immutable theme constants for the emitted deck.
///
/// External configuration, never derived from the document. Asset paths
/// are optional; a missing asset degrades to a solid fill / omitted
/// logo rather than failing the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpec {
    /// Slide background fill.
    pub background: Color,

    /// Title / highlight color.
    pub accent: Color,

    /// Main body text color.
    pub body_text: Color,

    /// Muted color for decorative elements.
    pub secondary_text: Color,

    /// Font family applied to every run.
    pub font_family: String,

    /// Title size on the opening slide, in points.
    pub opening_title_pt: u32,

    /// Title size on body slides, in points.
    pub body_title_pt: u32,

    /// Title size on the closing slide, in points.
    pub closing_title_pt: u32,

    /// Subtitle and bullet text size, in points.
    pub body_pt: u32,

    /// Logo image placed on the opening slide.
    pub logo: Option<PathBuf>,

    /// Full-bleed background image drawn behind every slide.
    pub background_image: Option<PathBuf>,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            background: Color::new(0x0B, 0x0F, 0x19),
            accent: Color::new(0x22, 0xD3, 0xEE),
            body_text: Color::new(0xF8, 0xFA, 0xFC),
            secondary_text: Color::new(0x94, 0xA3, 0xB8),
            font_family: "Microsoft YaHei".to_string(),
            opening_title_pt: 60,
            body_title_pt: 40,
            closing_title_pt: 60,
            body_pt: 24,
            logo: None,
            background_image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parses_hex_with_hash() {
        let c: Color = "#22D3EE".parse().unwrap();
        assert_eq!(c, Color::new(0x22, 0xD3, 0xEE));
    }

    #[test]
    fn test_color_parses_hex_without_hash() {
        let c: Color = "0b0f19".parse().unwrap();
        assert_eq!(c, Color::new(0x0B, 0x0F, 0x19));
    }

    #[test]
    fn test_color_rejects_bad_literal() {
        assert!("#22D3E".parse::<Color>().is_err());
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_round_trips_through_string() {
        let c = Color::new(0xF8, 0xFA, 0xFC);
        let s: String = c.into();
        assert_eq!(s, "#F8FAFC");
        assert_eq!(s.parse::<Color>().unwrap(), c);
    }

    #[test]
    fn test_empty_record() {
        assert!(SlideRecord::new().is_empty());

        let mut record = SlideRecord::new();
        record.bullets.push("hello".to_string());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_parse_mode_defaults_to_screen() {
        assert_eq!(ParseMode::default(), ParseMode::Screen);
    }
}
