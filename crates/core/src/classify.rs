//! Per-line classification: the single decision point of the compiler.
//!
//! `classify_line` is a pure function of the line, the current
//! [`ParseMode`], and the marker table. It never mutates anything; the
//! record builder applies the returned action.

use crate::markers::{MarkerRole, MarkerTable};
use crate::types::ParseMode;

/// The action a classified line produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Set the slide title. Mode-independent.
    SetTitle(String),
    /// Set the slide subtitle. Mode-independent.
    SetSubtitle(String),
    /// Switch the rest of the block to note mode. Produces no content.
    SwitchToNotes,
    /// Append a labeled screen field to the audience-visible bullets.
    AppendScreenField(String),
    /// Append an audience-visible bullet.
    AppendBullet(String),
    /// Append a presenter-only note.
    AppendNote(String),
    /// The line contributes nothing.
    Ignore,
}

/// Classify one trimmed, non-empty line.
///
/// Rules, in priority order: `#`-prefixed lines are ignored
/// unconditionally; a note marker switches mode; title and subtitle
/// markers set their field regardless of mode; any other screen-field
/// marker appends a labeled bullet; bare `*`/`-` bullets go to notes or
/// bullets depending on `mode`; everything else is ignored.
pub fn classify_line(line: &str, mode: ParseMode, markers: &MarkerTable) -> LineAction {
    if line.starts_with('#') {
        return LineAction::Ignore;
    }

    if let Some((token, role)) = markers.lookup(line) {
        return match role {
            MarkerRole::NoteSection => LineAction::SwitchToNotes,
            MarkerRole::Title => match text_after_colon(line) {
                Some(text) => LineAction::SetTitle(text),
                None => malformed_marker(line),
            },
            MarkerRole::Subtitle => match text_after_colon(line) {
                Some(text) => LineAction::SetSubtitle(text),
                None => malformed_marker(line),
            },
            MarkerRole::ScreenField => screen_field(line, token),
        };
    }

    if let Some(rest) = strip_bullet_prefix(line) {
        let text = rest.trim();
        if text.is_empty() {
            return LineAction::Ignore;
        }
        return match mode {
            ParseMode::Note => LineAction::AppendNote(text.to_string()),
            ParseMode::Screen => LineAction::AppendBullet(text.to_string()),
        };
    }

    LineAction::Ignore
}

/// A title/subtitle marker with no colon separator carries no text;
/// leave the field unset instead of failing.
fn malformed_marker(line: &str) -> LineAction {
    log::warn!("Marker line has no colon separator, ignoring: {line}");
    LineAction::Ignore
}

/// Text after the first colon, trimmed.
fn text_after_colon(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, rest)| rest.trim().to_string())
}

/// Build the `label: text` form for a generic screen field.
///
/// With a colon, the label is the token between the marker and the
/// colon; without one, the raw remainder after the marker is used.
fn screen_field(line: &str, token: &str) -> LineAction {
    let text = match line.split_once(':') {
        Some((before, after)) => {
            let label = line
                .find(token)
                .map(|start| start + token.len())
                .filter(|&end| end <= before.len())
                .map(|end| before[end..].trim())
                .unwrap_or("");
            let value = after.trim();
            if label.is_empty() {
                value.to_string()
            } else {
                format!("{label}: {value}")
            }
        }
        None => {
            let rest = strip_bullet_prefix(line).unwrap_or(line);
            rest.replacen(token, "", 1).trim().to_string()
        }
    };

    if text.is_empty() {
        LineAction::Ignore
    } else {
        LineAction::AppendScreenField(text)
    }
}

/// Strip a leading `*` or `-` bullet prefix, if present.
fn strip_bullet_prefix(line: &str) -> Option<&str> {
    line.strip_prefix('*').or_else(|| line.strip_prefix('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str, mode: ParseMode) -> LineAction {
        classify_line(line, mode, &MarkerTable::default())
    }

    #[test]
    fn test_heading_lines_ignored() {
        assert_eq!(classify("# Slide 3", ParseMode::Screen), LineAction::Ignore);
        assert_eq!(classify("## notes below", ParseMode::Note), LineAction::Ignore);
    }

    #[test]
    fn test_note_marker_switches_mode() {
        assert_eq!(classify("[Note]", ParseMode::Screen), LineAction::SwitchToNotes);
    }

    #[test]
    fn test_title_marker_sets_title() {
        assert_eq!(
            classify("[Screen] 标题: Hello", ParseMode::Screen),
            LineAction::SetTitle("Hello".to_string())
        );
    }

    #[test]
    fn test_title_marker_is_mode_independent() {
        // Structural markers fire even after the block switched to notes.
        assert_eq!(
            classify("[Screen] Title: Hello", ParseMode::Note),
            LineAction::SetTitle("Hello".to_string())
        );
        assert_eq!(
            classify("[Screen] Subtitle: World", ParseMode::Note),
            LineAction::SetSubtitle("World".to_string())
        );
    }

    #[test]
    fn test_title_marker_without_colon_is_ignored() {
        // Scenario D: no colon means no title, not a crash.
        assert_eq!(classify("[Screen] 标题 Hello", ParseMode::Screen), LineAction::Ignore);
    }

    #[test]
    fn test_title_keeps_text_after_first_colon_only() {
        assert_eq!(
            classify("[Screen] Title: Act One: Setup", ParseMode::Screen),
            LineAction::SetTitle("Act One: Setup".to_string())
        );
    }

    #[test]
    fn test_subtitle_marker_sets_subtitle() {
        assert_eq!(
            classify("[Screen] 副标题: The pitch", ParseMode::Screen),
            LineAction::SetSubtitle("The pitch".to_string())
        );
    }

    #[test]
    fn test_screen_field_preserves_label() {
        assert_eq!(
            classify("* [Screen] Slogan: ship it", ParseMode::Screen),
            LineAction::AppendScreenField("Slogan: ship it".to_string())
        );
    }

    #[test]
    fn test_screen_field_without_colon_uses_remainder() {
        assert_eq!(
            classify("* [Screen] just some text", ParseMode::Screen),
            LineAction::AppendScreenField("just some text".to_string())
        );
    }

    #[test]
    fn test_screen_field_without_label() {
        assert_eq!(
            classify("[Screen]: bare value", ParseMode::Screen),
            LineAction::AppendScreenField("bare value".to_string())
        );
    }

    #[test]
    fn test_marker_rules_win_over_bullet_rule() {
        // A bullet line carrying a structural marker is not double-counted.
        assert_eq!(
            classify("* [Screen] Title: Hello", ParseMode::Screen),
            LineAction::SetTitle("Hello".to_string())
        );
    }

    #[test]
    fn test_bullet_in_screen_mode() {
        assert_eq!(
            classify("* world", ParseMode::Screen),
            LineAction::AppendBullet("world".to_string())
        );
        assert_eq!(
            classify("- dash bullets too", ParseMode::Screen),
            LineAction::AppendBullet("dash bullets too".to_string())
        );
    }

    #[test]
    fn test_bullet_in_note_mode() {
        assert_eq!(
            classify("* remember this", ParseMode::Note),
            LineAction::AppendNote("remember this".to_string())
        );
    }

    #[test]
    fn test_empty_bullet_ignored() {
        // Scenario C: a prefix followed by only whitespace contributes nothing.
        assert_eq!(classify("*   ", ParseMode::Screen), LineAction::Ignore);
        assert_eq!(classify("*   ", ParseMode::Note), LineAction::Ignore);
    }

    #[test]
    fn test_plain_prose_ignored() {
        assert_eq!(classify("just a stray sentence", ParseMode::Screen), LineAction::Ignore);
    }

    #[test]
    fn test_screen_mode_never_targets_notes() {
        for line in ["* a", "- b", "[Screen] Label: c", "[Screen] Title: d"] {
            let action = classify(line, ParseMode::Screen);
            assert!(!matches!(action, LineAction::AppendNote(_)), "{line:?} -> {action:?}");
        }
    }

    #[test]
    fn test_note_mode_bullets_never_target_bullets() {
        let action = classify("* a", ParseMode::Note);
        assert!(!matches!(action, LineAction::AppendBullet(_)));
    }
}
