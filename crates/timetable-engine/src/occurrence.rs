//! Course-occurrence records and the read contract over the record source.
//!
//! Records arrive from an institutional feed whose shape is mostly stable
//! but occasionally sloppy: the `professors` field may be a bare string
//! instead of a list. That coercion happens here, at the deserialization
//! boundary, so downstream aggregation never re-checks it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One scheduled instance of a course for one class group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOccurrence {
    pub id: String,
    /// Course/session name. A `"TA"` prefix denotes an unsupervised
    /// self-study session.
    pub title: String,
    /// Free-text annotation; non-empty signals "has notes" in presentation.
    #[serde(default)]
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Class section/cohort this occurrence belongs to.
    pub group: String,
    /// Professors teaching the session. Malformed records carry a bare
    /// string here; it deserializes to a one-element list.
    #[serde(default, deserialize_with = "string_or_list")]
    pub professors: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Soft-delete flag; disabled occurrences are excluded from aggregation
    /// unless a filter asks for them.
    #[serde(default)]
    pub disabled: bool,
}

impl CourseOccurrence {
    /// Whether this is an unsupervised self-study session.
    pub fn is_self_study(&self) -> bool {
        self.title.starts_with("TA")
    }
}

/// Accept either a single string or a list of strings.
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

/// Conditions accepted by the record source's read contract.
///
/// All fields are optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceFilter {
    pub group: Option<String>,
    /// Matches records listing this name among their professors.
    pub professor: Option<String>,
    pub disabled: Option<bool>,
}

impl OccurrenceFilter {
    /// The filter used by group-facing views: one group, soft-deleted
    /// records excluded.
    pub fn for_group(group: &str) -> Self {
        OccurrenceFilter {
            group: Some(group.to_string()),
            professor: None,
            disabled: Some(false),
        }
    }

    /// The filter used by professor-facing views: one professor,
    /// soft-deleted records excluded.
    pub fn for_professor(name: &str) -> Self {
        OccurrenceFilter {
            group: None,
            professor: Some(name.to_string()),
            disabled: Some(false),
        }
    }

    pub fn matches(&self, occurrence: &CourseOccurrence) -> bool {
        if let Some(group) = &self.group {
            if &occurrence.group != group {
                return false;
            }
        }
        if let Some(professor) = &self.professor {
            if !occurrence.professors.iter().any(|p| p == professor) {
                return false;
            }
        }
        if let Some(disabled) = self.disabled {
            if occurrence.disabled != disabled {
                return false;
            }
        }
        true
    }
}

/// Read contract over the external course record source.
///
/// The engine only ever reads through this interface; persistence and
/// querying live behind it.
pub trait CourseSource {
    fn fetch(&self, filter: &OccurrenceFilter) -> Result<Vec<CourseOccurrence>>;
}

/// A course source over an already-materialized record set.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<CourseOccurrence>,
}

impl InMemorySource {
    pub fn new(records: Vec<CourseOccurrence>) -> Self {
        InMemorySource { records }
    }

    /// Distinct group identifiers present in the record set, sorted.
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self.records.iter().map(|o| o.group.clone()).collect();
        groups.sort();
        groups.dedup();
        groups
    }
}

impl CourseSource for InMemorySource {
    fn fetch(&self, filter: &OccurrenceFilter) -> Result<Vec<CourseOccurrence>> {
        Ok(self
            .records
            .iter()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect())
    }
}
