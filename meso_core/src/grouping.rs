//! Muscle-group ordering checks for a planned day.
//!
//! A day is well grouped when every muscle group's slots sit in one
//! unbroken run, e.g. chest, chest, back rather than chest, back, chest.

use crate::{MuscleGroupId, PlannedSlot};
use std::collections::HashMap;

/// Days shorter than this cannot be flagged
const MIN_CHECKED_SLOTS: usize = 3;

/// Where a muscle group's run was broken
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupingSplit {
    pub muscle_group_id: MuscleGroupId,
    /// Index of the group's previous slot
    pub last_seen: usize,
    /// Index at which the group reappeared
    pub index: usize,
}

/// Find the first slot that returns to a muscle group after another group
/// intervened
pub fn first_split(slots: &[PlannedSlot]) -> Option<GroupingSplit> {
    let mut last_seen: HashMap<MuscleGroupId, usize> = HashMap::new();

    for (index, slot) in slots.iter().enumerate() {
        if let Some(&previous) = last_seen.get(&slot.muscle_group_id) {
            // A repeat implies index >= 1
            if index - 1 > previous {
                return Some(GroupingSplit {
                    muscle_group_id: slot.muscle_group_id,
                    last_seen: previous,
                    index,
                });
            }
        }
        last_seen.insert(slot.muscle_group_id, index);
    }

    None
}

/// Whether every muscle group in the day forms one contiguous run
pub fn is_valid_grouping(slots: &[PlannedSlot]) -> bool {
    if slots.len() < MIN_CHECKED_SLOTS {
        return true;
    }

    match first_split(slots) {
        Some(split) => {
            tracing::debug!(
                "Muscle group {:?} split: last seen at {}, again at {}",
                split.muscle_group_id,
                split.last_seen,
                split.index
            );
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(ids: &[Option<u64>]) -> Vec<PlannedSlot> {
        ids.iter().map(|id| PlannedSlot::new(*id)).collect()
    }

    #[test]
    fn test_short_days_are_valid() {
        assert!(is_valid_grouping(&[]));
        assert!(is_valid_grouping(&slots(&[Some(1)])));
        assert!(is_valid_grouping(&slots(&[Some(1), Some(2)])));
        assert!(is_valid_grouping(&slots(&[Some(1), Some(1)])));
    }

    #[test]
    fn test_contiguous_groups_are_valid() {
        assert!(is_valid_grouping(&slots(&[Some(1), Some(1), Some(2)])));
        assert!(is_valid_grouping(&slots(&[
            Some(3),
            Some(3),
            Some(1),
            Some(2),
            Some(2),
            Some(2),
        ])));
    }

    #[test]
    fn test_split_group_is_invalid() {
        assert!(!is_valid_grouping(&slots(&[Some(1), Some(2), Some(1)])));
    }

    #[test]
    fn test_split_after_long_gap_is_invalid() {
        let day = slots(&[Some(1), Some(1), Some(2), Some(3), Some(1)]);
        assert!(!is_valid_grouping(&day));
        assert_eq!(
            first_split(&day),
            Some(GroupingSplit {
                muscle_group_id: Some(1),
                last_seen: 1,
                index: 4,
            })
        );
    }

    #[test]
    fn test_missing_muscle_group_is_its_own_group() {
        assert!(is_valid_grouping(&slots(&[None, None, Some(2)])));
        assert!(!is_valid_grouping(&slots(&[None, Some(2), None])));
    }

    #[test]
    fn test_first_split_reports_earliest() {
        let day = slots(&[Some(1), Some(2), Some(1), Some(2)]);
        let split = first_split(&day).unwrap();
        assert_eq!(split.muscle_group_id, Some(1));
        assert_eq!(split.index, 2);
    }

    #[test]
    fn test_grouping_is_repeatable() {
        crate::logging::init_test();
        let day = slots(&[Some(1), Some(2), Some(1)]);
        assert_eq!(is_valid_grouping(&day), is_valid_grouping(&day));
    }
}
