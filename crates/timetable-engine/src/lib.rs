//! # timetable-engine
//!
//! Schedule aggregation and conflict detection for an institutional
//! timetable feed.
//!
//! The engine is a set of pure, synchronous transformations over
//! already-fetched course-occurrence records: it groups occurrences into
//! displayable time slots, computes the calendar-day window for a viewport
//! class, locates the next future occurrence of a course, cross-references
//! class groups for scheduling collisions, and merges per-group copies of a
//! professor's session. It schedules, mutates, and persists nothing.
//!
//! ## Modules
//!
//! - [`occurrence`] — record model, feed normalization, the read contract
//! - [`slots`] — start-instant slot grouping
//! - [`window`] — viewport date windows, week navigation, weekend skip
//! - [`locate`] — next future occurrence of a course
//! - [`conflict`] — cross-group collision detection
//! - [`dedupe`] — professor-view session merging
//! - [`error`] — error types

pub mod conflict;
pub mod dedupe;
pub mod error;
pub mod locate;
pub mod occurrence;
pub mod slots;
pub mod window;

pub use conflict::{combinations, detect_all, ConflictReport};
pub use dedupe::{dedupe_sessions, professor_names, DeduplicatedSession};
pub use error::EngineError;
pub use locate::next_occurrence;
pub use occurrence::{CourseOccurrence, CourseSource, InMemorySource, OccurrenceFilter};
pub use slots::{group_by_start, TimeSlotGroup};
pub use window::{
    first_day_of_week, last_working_day_of_week, skip_weekend, step, window, DateWindow, SizeClass,
};
