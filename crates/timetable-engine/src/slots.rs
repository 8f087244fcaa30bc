//! Group occurrences into displayable time slots.
//!
//! A slot is the set of occurrences sharing an identical start instant —
//! exact equality, not interval overlap. Simultaneous sessions render side
//! by side in one slot.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::occurrence::CourseOccurrence;

/// A non-empty set of occurrences sharing one exact start instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlotGroup {
    pub start: NaiveDateTime,
    pub occurrences: Vec<CourseOccurrence>,
}

/// Partition occurrences into time slots keyed by exact `start` equality,
/// ordered ascending by start.
///
/// Members keep their input order within a slot. Nothing is dropped or
/// duplicated: slot member counts sum to the input length. Empty input
/// yields empty output.
pub fn group_by_start(occurrences: &[CourseOccurrence]) -> Vec<TimeSlotGroup> {
    let mut slots: BTreeMap<NaiveDateTime, Vec<CourseOccurrence>> = BTreeMap::new();

    for occurrence in occurrences {
        slots
            .entry(occurrence.start)
            .or_default()
            .push(occurrence.clone());
    }

    slots
        .into_iter()
        .map(|(start, occurrences)| TimeSlotGroup { start, occurrences })
        .collect()
}
