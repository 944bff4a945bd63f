//! Plain-text digest of a set of events, for display or sharing.

use serde::{Deserialize, Serialize};

use crate::event::{Event, sort_by_schedule};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No upcoming events";

/// Labels that replace the AM/PM indicator, e.g. `காலை` / `மாலை`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeridiemLabels {
    pub am: String,
    pub pm: String,
}

impl MeridiemLabels {
    /// Rewrite "hh:mm AM" as "<label> hh:mm".
    ///
    /// Values that are not in that shape are returned unchanged.
    pub fn apply(&self, time: &str) -> String {
        let Some((clock, indicator)) = time.trim().split_once(' ') else {
            return time.to_string();
        };

        let label = if indicator.eq_ignore_ascii_case("AM") {
            &self.am
        } else if indicator.eq_ignore_ascii_case("PM") {
            &self.pm
        } else {
            return time.to_string();
        };

        format!("{} {}", label, clock)
    }
}

#[derive(Debug, Clone)]
pub struct SummaryFormatter {
    labels: Option<MeridiemLabels>,
    empty_message: String,
    include_names: bool,
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        SummaryFormatter {
            labels: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            include_names: false,
        }
    }
}

impl SummaryFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: Option<MeridiemLabels>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Add a `Name:` line to each block, for summaries spanning several people.
    pub fn with_names(mut self, include_names: bool) -> Self {
        self.include_names = include_names;
        self
    }

    /// Render `events` under `heading`, one block per event in schedule order.
    /// Times order by clock value, so "09:00 AM" comes before "05:00 PM".
    pub fn render(&self, events: &[Event], heading: &str) -> String {
        if events.is_empty() {
            return self.empty_message.clone();
        }

        let mut sorted = events.to_vec();
        sort_by_schedule(&mut sorted);

        let mut blocks = Vec::with_capacity(sorted.len() + 1);
        if !heading.trim().is_empty() {
            blocks.push(heading.trim().to_string());
        }

        for event in &sorted {
            let mut lines = Vec::with_capacity(3);
            if self.include_names {
                lines.push(format!("Name: {}", event.name));
            }
            lines.push(format!("Date: {}", event.date));
            lines.push(format!("Time: {}", self.render_time(&event.time)));
            blocks.push(lines.join("\n"));
        }

        blocks.join("\n\n").trim().to_string()
    }

    fn render_time(&self, time: &str) -> String {
        match &self.labels {
            Some(labels) => labels.apply(time),
            None => time.to_string(),
        }
    }
}

/// Render with default settings: no labels, no names.
pub fn render_summary(events: &[Event], heading: &str) -> String {
    SummaryFormatter::default().render(events, heading)
}
