//! Viewport date windows and week navigation.
//!
//! The visible calendar range depends on a coarse viewport classification:
//! one day on phones and tablets, three days on intermediate screens, the
//! Monday–Friday working week on desktop. The week starts on Monday
//! regardless of locale. Weekend anchors are skipped forward to Monday
//! before a working-week window is computed, so a Saturday anchor never
//! produces an all-weekend (course-free) view.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Coarse viewport-width classification, supplied by the caller.
///
/// The engine takes the classification as an opaque input; deriving it from
/// screen width against breakpoint thresholds is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Phone/tablet breakpoints: a single-day view.
    Narrow,
    /// Intermediate breakpoint: a three-day view centered on the anchor.
    Medium,
    /// Desktop: the Monday–Friday working week.
    Wide,
}

impl FromStr for SizeClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(SizeClass::Narrow),
            "medium" => Ok(SizeClass::Medium),
            "wide" => Ok(SizeClass::Wide),
            other => Err(EngineError::UnknownSizeClass(other.to_string())),
        }
    }
}

/// An inclusive range of calendar days to render.
///
/// `start <= end` always holds; a one-day window has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Every calendar day in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// The most recent Monday on or before `date`.
pub fn first_day_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The Friday of the week containing `date`.
pub fn last_working_day_of_week(date: NaiveDate) -> NaiveDate {
    first_day_of_week(date) + Duration::days(4)
}

/// Skip a weekend date forward to the following Monday.
///
/// Weekdays pass through unchanged; the function is idempotent. Callers
/// apply it to the anchor once, upstream of [`window`], when computing a
/// [`SizeClass::Wide`] view.
pub fn skip_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// The inclusive day range to display for an anchor date and size class.
///
/// Pure in `(anchor, size)`: no I/O, no hidden state.
pub fn window(anchor: NaiveDate, size: SizeClass) -> DateWindow {
    match size {
        SizeClass::Narrow => DateWindow {
            start: anchor,
            end: anchor,
        },
        SizeClass::Medium => DateWindow {
            start: anchor - Duration::days(1),
            end: anchor + Duration::days(1),
        },
        SizeClass::Wide => DateWindow {
            start: first_day_of_week(anchor),
            end: last_working_day_of_week(anchor),
        },
    }
}

/// Move the anchor one navigation step: a day on narrow/medium viewports,
/// a whole week on wide. Only the sign of `direction` matters.
pub fn step(anchor: NaiveDate, size: SizeClass, direction: i32) -> NaiveDate {
    let days = match size {
        SizeClass::Narrow | SizeClass::Medium => 1,
        SizeClass::Wide => 7,
    };
    anchor + Duration::days(days * i64::from(direction.signum()))
}
