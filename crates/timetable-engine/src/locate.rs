//! Find the next future occurrence of a course.

use chrono::NaiveDateTime;

use crate::occurrence::CourseOccurrence;

/// The earliest occurrence of `title` starting at or after `now`.
///
/// Ties on start time resolve to the first candidate in input order, so the
/// result is deterministic for a fixed input. `None` means the course has
/// no remaining occurrence in the loaded set — an expected outcome, not an
/// error; callers leave their view unchanged.
pub fn next_occurrence<'a>(
    title: &str,
    occurrences: &'a [CourseOccurrence],
    now: NaiveDateTime,
) -> Option<&'a CourseOccurrence> {
    let mut next: Option<&CourseOccurrence> = None;

    for occurrence in occurrences {
        if occurrence.title != title || occurrence.start < now {
            continue;
        }
        match next {
            Some(best) if best.start <= occurrence.start => {}
            _ => next = Some(occurrence),
        }
    }

    next
}
