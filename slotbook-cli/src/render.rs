//! Terminal rendering for slotbook types.

use owo_colors::OwoColorize;
use slotbook_core::Event;
use slotbook_core::summary::MeridiemLabels;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {}  {}  {}",
            format!("#{:<4}", self.id).dimmed(),
            format!("{:<10}", self.date).bold(),
            self.time,
            self.name
        )
    }
}

/// Render a list of events, one per line, with optional AM/PM labels.
pub fn render_events(events: &[Event], labels: Option<&MeridiemLabels>) -> String {
    events
        .iter()
        .map(|event| match labels {
            Some(labels) => Event {
                time: labels.apply(&event.time),
                ..event.clone()
            }
            .render(),
            None => event.render(),
        })
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
