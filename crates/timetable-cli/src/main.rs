//! `timetable` CLI — inspect a timetable feed and detect scheduling
//! conflicts from the command line.
//!
//! The feed is a JSON array of course-occurrence records, read from a file
//! or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Per-group conflict combinations for every group in the feed
//! timetable conflicts -i occurrences.json
//!
//! # Restrict detection to specific groups
//! timetable conflicts -i occurrences.json --groups 23_24_B1_CYBER,23_24_B1_IA
//!
//! # The visible day range for a desktop viewport, one week back
//! timetable window --anchor 2024-01-10 --size wide --step -1
//!
//! # One day's time slots for a group
//! timetable slots -i occurrences.json --date 2024-01-08 --group 23_24_B1_IA
//!
//! # Jump target for the next "Algo" session
//! timetable next -i occurrences.json --title Algo --now 2024-01-01T00:00:00
//!
//! # Professor-facing merged sessions
//! timetable dedupe -i occurrences.json --professor "A. Turing"
//!
//! # Distinct professor names in the feed
//! timetable professors -i occurrences.json
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

use timetable_engine::{
    dedupe_sessions, detect_all, group_by_start, next_occurrence, professor_names, skip_weekend,
    step, window, CourseOccurrence, CourseSource, InMemorySource, OccurrenceFilter, SizeClass,
};

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Timetable aggregation and conflict detection CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect per-group scheduling conflicts across the feed
    Conflicts {
        /// Input occurrences JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Comma-separated group identifiers (defaults to every group present)
        #[arg(long)]
        groups: Option<String>,
    },
    /// Compute the visible day range for an anchor date and viewport class
    Window {
        /// Anchor date (YYYY-MM-DD)
        #[arg(long)]
        anchor: NaiveDate,
        /// Viewport size class: narrow, medium, or wide
        #[arg(long)]
        size: String,
        /// Navigation steps to apply to the anchor first (may be negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        step: i32,
    },
    /// Show one day's time slots for a group
    Slots {
        /// Input occurrences JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Calendar day to display (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Restrict to one class group
        #[arg(long)]
        group: Option<String>,
    },
    /// Find the next future occurrence of a course
    Next {
        /// Input occurrences JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Course title to look for
        #[arg(long)]
        title: String,
        /// Reference instant (defaults to the current local time)
        #[arg(long)]
        now: Option<NaiveDateTime>,
    },
    /// Merge per-group copies of a professor's sessions
    Dedupe {
        /// Input occurrences JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Restrict to sessions taught by this professor
        #[arg(long)]
        professor: Option<String>,
    },
    /// List the distinct professor names in the feed
    Professors {
        /// Input occurrences JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Conflicts { input, groups } => {
            let source = load_source(input.as_deref())?;
            let groups: Vec<String> = match groups {
                Some(raw) => raw
                    .split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(str::to_string)
                    .collect(),
                None => source.groups(),
            };

            let report = detect_all(&groups, &source);
            for group in &report.failed_groups {
                eprintln!("warning: could not fetch records for group {}", group);
            }
            println!("{}", serde_json::to_string_pretty(&report.by_group)?);
        }
        Commands::Window {
            anchor,
            size,
            step: steps,
        } => {
            let size: SizeClass = size.parse()?;

            let mut anchor = anchor;
            for _ in 0..steps.abs() {
                anchor = step(anchor, size, steps.signum());
            }
            // Weekend anchors would render an all-weekend working week.
            if size == SizeClass::Wide {
                anchor = skip_weekend(anchor);
            }

            let w = window(anchor, size);
            let days: Vec<NaiveDate> = w.days().collect();
            let value = serde_json::json!({
                "anchor": anchor,
                "start": w.start,
                "end": w.end,
                "days": days,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Slots { input, date, group } => {
            let source = load_source(input.as_deref())?;
            let filter = OccurrenceFilter {
                group,
                professor: None,
                disabled: Some(false),
            };
            let occurrences: Vec<CourseOccurrence> = source
                .fetch(&filter)?
                .into_iter()
                .filter(|o| o.start.date() == date)
                .collect();

            let slots = group_by_start(&occurrences);
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
        Commands::Next { input, title, now } => {
            let source = load_source(input.as_deref())?;
            let occurrences = source.fetch(&OccurrenceFilter {
                group: None,
                professor: None,
                disabled: Some(false),
            })?;
            let now = now.unwrap_or_else(|| Local::now().naive_local());

            match next_occurrence(&title, &occurrences, now) {
                Some(occurrence) => {
                    println!("{}", serde_json::to_string_pretty(occurrence)?)
                }
                // An exhausted course is an expected outcome, not a failure.
                None => println!("null"),
            }
        }
        Commands::Dedupe { input, professor } => {
            let source = load_source(input.as_deref())?;
            let filter = match professor.as_deref() {
                Some(name) => OccurrenceFilter::for_professor(name),
                None => OccurrenceFilter {
                    group: None,
                    professor: None,
                    disabled: Some(false),
                },
            };

            let sessions = dedupe_sessions(&source.fetch(&filter)?);
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        Commands::Professors { input } => {
            let source = load_source(input.as_deref())?;
            let occurrences = source.fetch(&OccurrenceFilter {
                group: None,
                professor: None,
                disabled: Some(false),
            })?;

            for name in professor_names(&occurrences) {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Load the occurrence feed from a file or stdin into an in-memory source.
fn load_source(path: Option<&str>) -> Result<InMemorySource> {
    let raw = read_input(path)?;
    let records: Vec<CourseOccurrence> =
        serde_json::from_str(&raw).context("Failed to parse occurrences JSON")?;
    Ok(InMemorySource::new(records))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
