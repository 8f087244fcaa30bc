//! Cross-group detection of scheduling collisions.
//!
//! A collision is two or more distinct courses sharing one exact
//! `(start, end)` slot in a group's timetable. Self-study sessions (`"TA"`
//! prefix) never count toward a collision: they are unsupervised and yield
//! to any scheduled course.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::occurrence::{CourseOccurrence, CourseSource, OccurrenceFilter};

/// Per-group conflict combinations plus the groups whose fetch failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConflictReport {
    /// Group identifier → deduplicated list of conflicting title sets.
    /// This mapping is the wire response.
    pub by_group: BTreeMap<String, Vec<Vec<String>>>,
    /// Groups whose records could not be fetched. Their entries are
    /// omitted from `by_group` instead of aborting the whole run.
    pub failed_groups: Vec<String>,
}

/// The distinct sets of simultaneously-scheduled course titles in one
/// group's occurrence list.
///
/// Occurrences are partitioned by exact `(start, end)` equality — a
/// stricter key than display-slot grouping. A partition yields a
/// combination only when at least two distinct non-self-study titles share
/// the slot. Titles within a combination are sorted, so fetch order cannot
/// split logically identical combinations, and a combination is reported
/// once per group.
pub fn combinations(occurrences: &[CourseOccurrence]) -> Vec<Vec<String>> {
    let mut slots: BTreeMap<(NaiveDateTime, NaiveDateTime), Vec<&CourseOccurrence>> =
        BTreeMap::new();

    for occurrence in occurrences {
        slots
            .entry((occurrence.start, occurrence.end))
            .or_default()
            .push(occurrence);
    }

    let mut combinations: Vec<Vec<String>> = Vec::new();

    for members in slots.values() {
        // A slot with a single record cannot conflict.
        if members.len() < 2 {
            continue;
        }

        let mut titles: Vec<String> = members
            .iter()
            .filter(|o| !o.is_self_study())
            .map(|o| o.title.clone())
            .collect();
        titles.sort();
        titles.dedup();

        // Several copies of one course in the same slot is not a conflict.
        if titles.len() < 2 {
            continue;
        }

        if !combinations.contains(&titles) {
            combinations.push(titles);
        }
    }

    combinations
}

/// Detect conflicts for every group, fetching each group's non-disabled
/// records through the course source.
///
/// Fetches run one at a time; the record source never sees more than one
/// outstanding call. Each group's detection is independent, so a failing
/// fetch is recorded in [`ConflictReport::failed_groups`] and skipped while
/// the remaining groups still produce results.
pub fn detect_all<S: CourseSource>(groups: &[String], source: &S) -> ConflictReport {
    let mut report = ConflictReport::default();

    for group in groups {
        match source.fetch(&OccurrenceFilter::for_group(group)) {
            Ok(occurrences) => {
                report
                    .by_group
                    .insert(group.clone(), combinations(&occurrences));
            }
            Err(_) => report.failed_groups.push(group.clone()),
        }
    }

    report
}
