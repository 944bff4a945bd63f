//! Scheduled event types.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::when::{compare_clocks, compare_days, is_expired};

/// An event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    /// Day as "D/M/YYYY"
    pub date: String,
    /// Clock value as "hh:mm AM/PM"
    pub time: String,
}

impl NewEvent {
    pub fn new(name: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        NewEvent {
            name: name.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

/// A stored event.
///
/// `name` is a copy of the person's name, not a reference into the registry:
/// removing or renaming a person leaves existing events alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
    /// Insert time in epoch milliseconds
    pub created_at: i64,
}

impl Event {
    /// Whether the event's day is today or later. Unparseable days count as
    /// upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        !is_expired(&self.date, today)
    }

    /// Chronological order: day, then clock value.
    pub fn cmp_schedule(&self, other: &Event) -> Ordering {
        compare_days(&self.date, &other.date).then_with(|| compare_clocks(&self.time, &other.time))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} on {} at {}", self.name, self.date, self.time)
    }
}

/// Sort events by day, then clock value.
pub fn sort_by_schedule(events: &mut [Event]) {
    events.sort_by(|a, b| a.cmp_schedule(b));
}

/// Sort events by person name (ASCII case folded), then day, then clock value.
pub fn sort_by_name_then_schedule(events: &mut [Event]) {
    events.sort_by(|a, b| {
        compare_names(&a.name, &b.name)
            .then_with(|| a.cmp_schedule(b))
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
