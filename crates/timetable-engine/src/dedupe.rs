//! Professor-facing view: merge per-group copies of one physical session.
//!
//! A professor teaching several groups at once appears once per group in
//! the feed. Records sharing `(start, end, location)` collapse into one
//! session listing every participating group. Per-group descriptions are
//! dropped from the merged output so annotations never leak across groups.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::occurrence::CourseOccurrence;

/// One physical session merged from per-group records.
///
/// Carries the representative occurrence's fields minus its description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeduplicatedSession {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub professors: Vec<String>,
    pub location: Option<String>,
    /// Every group attending the session, in encounter order.
    pub groups: Vec<String>,
}

/// Collapse occurrences that represent the same physical session.
///
/// The first record (input order) of each `(start, end, location)` class
/// provides the session's fields; later records only contribute their
/// group. Running the merge over an already-merged set changes nothing.
pub fn dedupe_sessions(occurrences: &[CourseOccurrence]) -> Vec<DeduplicatedSession> {
    let mut sessions: Vec<DeduplicatedSession> = Vec::new();
    let mut by_key: HashMap<(NaiveDateTime, NaiveDateTime, Option<String>), usize> =
        HashMap::new();

    for occurrence in occurrences {
        let key = (
            occurrence.start,
            occurrence.end,
            occurrence.location.clone(),
        );
        match by_key.get(&key) {
            Some(&index) => sessions[index].groups.push(occurrence.group.clone()),
            None => {
                by_key.insert(key, sessions.len());
                sessions.push(DeduplicatedSession {
                    id: occurrence.id.clone(),
                    title: occurrence.title.clone(),
                    start: occurrence.start,
                    end: occurrence.end,
                    professors: occurrence.professors.clone(),
                    location: occurrence.location.clone(),
                    groups: vec![occurrence.group.clone()],
                });
            }
        }
    }

    sessions
}

/// Distinct professor names across the set, sorted.
///
/// Names containing digits are placeholder/room codes in the feed and are
/// skipped.
pub fn professor_names(occurrences: &[CourseOccurrence]) -> Vec<String> {
    let mut names: Vec<String> = occurrences
        .iter()
        .flat_map(|o| o.professors.iter())
        .filter(|name| !name.chars().any(|c| c.is_ascii_digit()))
        .cloned()
        .collect();
    names.sort();
    names.dedup();
    names
}
