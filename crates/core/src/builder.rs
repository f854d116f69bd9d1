//! Slide record construction: a single-pass state machine over one block.

use crate::classify::{classify_line, LineAction};
use crate::markers::MarkerTable;
use crate::segment::RawBlock;
use crate::types::{ParseMode, SlideRecord};

/// Build one [`SlideRecord`] from one [`RawBlock`].
///
/// Runs the classifier over each line in order, threading the parse
/// mode explicitly: every block starts in `Screen`, and a note marker
/// flips it to `Note` for the remainder of the block.
///
/// A repeated title or subtitle declaration overwrites the earlier one
/// (last write wins); screen fields land in `bullets`, which do not
/// distinguish fields from plain bullets.
pub fn build_record(block: &RawBlock, markers: &MarkerTable) -> SlideRecord {
    let mut record = SlideRecord::new();
    let mut mode = ParseMode::Screen;

    for line in &block.lines {
        match classify_line(line, mode, markers) {
            LineAction::SetTitle(text) => record.title = Some(text),
            LineAction::SetSubtitle(text) => record.subtitle = Some(text),
            LineAction::SwitchToNotes => mode = ParseMode::Note,
            LineAction::AppendScreenField(text) | LineAction::AppendBullet(text) => {
                record.bullets.push(text)
            }
            LineAction::AppendNote(text) => record.notes.push(text),
            LineAction::Ignore => {}
        }
    }

    record
}

/// Build records for every block, in order.
pub fn build_records(blocks: &[RawBlock], markers: &MarkerTable) -> Vec<SlideRecord> {
    blocks.iter().map(|block| build_record(block, markers)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    fn build(doc: &str) -> SlideRecord {
        let blocks = segment(doc);
        assert_eq!(blocks.len(), 1, "expected a single block");
        build_record(&blocks[0], &MarkerTable::default())
    }

    #[test]
    fn test_scenario_a() {
        let record = build("[Screen] 标题: Hello\n* world\n[Note]\n* remember this");
        assert_eq!(record.title.as_deref(), Some("Hello"));
        assert_eq!(record.subtitle, None);
        assert_eq!(record.bullets, vec!["world"]);
        assert_eq!(record.notes, vec!["remember this"]);
    }

    #[test]
    fn test_note_mode_is_sticky_for_rest_of_block() {
        let record = build("* visible\n[Note]\n* hidden one\n* hidden two");
        assert_eq!(record.bullets, vec!["visible"]);
        assert_eq!(record.notes, vec!["hidden one", "hidden two"]);
    }

    #[test]
    fn test_mode_resets_between_blocks() {
        let blocks = segment("[Note]\n* a note\n---\n* a bullet");
        let records = build_records(&blocks, &MarkerTable::default());
        assert_eq!(records[0].notes, vec!["a note"]);
        assert!(records[0].bullets.is_empty());
        assert_eq!(records[1].bullets, vec!["a bullet"]);
        assert!(records[1].notes.is_empty());
    }

    #[test]
    fn test_title_after_note_marker_still_sets_title() {
        let record = build("[Note]\n* aside\n[Screen] Title: Late Title");
        assert_eq!(record.title.as_deref(), Some("Late Title"));
        assert_eq!(record.notes, vec!["aside"]);
    }

    #[test]
    fn test_duplicate_title_last_write_wins() {
        let record = build("[Screen] Title: First\n[Screen] Title: Second");
        assert_eq!(record.title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_screen_fields_and_bullets_share_one_list() {
        let record = build("[Screen] Author: Ada\n* keyword");
        assert_eq!(record.bullets, vec!["Author: Ada", "keyword"]);
    }

    #[test]
    fn test_bullets_and_notes_partition_content() {
        let record = build("* a\n* b\n[Note]\n* c\n* d");
        assert_eq!(record.bullets.len() + record.notes.len(), 4);
        for bullet in &record.bullets {
            assert!(!record.notes.contains(bullet));
        }
    }

    #[test]
    fn test_block_of_only_ignorable_lines_yields_empty_record() {
        let record = build("# heading\nstray prose");
        assert!(record.is_empty());
    }

    #[test]
    fn test_malformed_title_marker_leaves_title_unset() {
        let record = build("[Screen] 标题 Hello\n* world");
        assert_eq!(record.title, None);
        assert_eq!(record.bullets, vec!["world"]);
    }
}
