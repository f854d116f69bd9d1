//! Layout assignment: mapping slide position to a positional template.

use crate::types::{LayoutRole, SlideRecord};

/// The role for the slide at `index` in a deck of `total` slides.
///
/// Index 0 opens, the last index closes, everything between is body.
/// A single-slide deck is both first and last; the closing template
/// takes precedence there.
pub fn role_for(index: usize, total: usize) -> LayoutRole {
    if total > 0 && index == total - 1 {
        LayoutRole::Closing
    } else if index == 0 {
        LayoutRole::Opening
    } else {
        LayoutRole::Body
    }
}

/// Pair every record with its positional role, preserving order.
///
/// Pure function of position and length; content is never inspected.
pub fn assign_roles(records: Vec<SlideRecord>) -> Vec<(SlideRecord, LayoutRole)> {
    let total = records.len();
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| (record, role_for(index, total)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<SlideRecord> {
        (0..n)
            .map(|i| SlideRecord {
                title: Some(format!("slide {i}")),
                ..SlideRecord::default()
            })
            .collect()
    }

    fn roles(n: usize) -> Vec<LayoutRole> {
        assign_roles(records(n)).into_iter().map(|(_, role)| role).collect()
    }

    #[test]
    fn test_scenario_b_three_slides() {
        assert_eq!(
            roles(3),
            vec![LayoutRole::Opening, LayoutRole::Body, LayoutRole::Closing]
        );
    }

    #[test]
    fn test_two_slides_have_no_body() {
        assert_eq!(roles(2), vec![LayoutRole::Opening, LayoutRole::Closing]);
    }

    #[test]
    fn test_single_slide_closing_wins() {
        assert_eq!(roles(1), vec![LayoutRole::Closing]);
    }

    #[test]
    fn test_empty_deck() {
        assert!(roles(0).is_empty());
    }

    #[test]
    fn test_exactly_one_opening_and_closing_when_two_or_more() {
        for n in 2..8 {
            let roles = roles(n);
            let openings = roles.iter().filter(|r| **r == LayoutRole::Opening).count();
            let closings = roles.iter().filter(|r| **r == LayoutRole::Closing).count();
            assert_eq!((openings, closings), (1, 1), "deck of {n}");
        }
    }

    #[test]
    fn test_assignment_is_idempotent() {
        let once = assign_roles(records(5));
        let twice = assign_roles(once.iter().map(|(r, _)| r.clone()).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_records_pass_through_in_order() {
        let assigned = assign_roles(records(4));
        for (i, (record, _)) in assigned.iter().enumerate() {
            assert_eq!(record.title.as_deref(), Some(format!("slide {i}").as_str()));
        }
    }
}
