//! Per-person choices that become a batch of events.
//!
//! A `SelectionSheet` is the list the caller shows next to the registered
//! names: each row can be ticked and given its own time. Only rows that are
//! both ticked and timed end up in the batch.

use serde::{Deserialize, Serialize};

use crate::error::{SlotbookError, SlotbookResult};
use crate::event::NewEvent;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub selected: bool,
    /// Empty until a time is chosen
    pub time: String,
}

impl Selection {
    pub fn new(name: impl Into<String>) -> Self {
        Selection {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Ticked and given a non-blank time.
    pub fn is_eligible(&self) -> bool {
        self.selected && !self.time.trim().is_empty()
    }

    fn clear(&mut self) {
        self.selected = false;
        self.time.clear();
    }
}

/// Turn the eligible selections into events on the shared `date`.
pub fn build_event_batch(selections: &[Selection], date: &str) -> SlotbookResult<Vec<NewEvent>> {
    if date.trim().is_empty() {
        return Err(SlotbookError::validation("missing date"));
    }

    let batch: Vec<NewEvent> = selections
        .iter()
        .filter(|s| s.is_eligible())
        .map(|s| NewEvent::new(s.name.trim(), date.trim(), s.time.trim()))
        .collect();

    if batch.is_empty() {
        return Err(SlotbookError::validation("no valid selections"));
    }

    Ok(batch)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSheet {
    selections: Vec<Selection>,
}

impl SelectionSheet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectionSheet {
            selections: names.into_iter().map(Selection::new).collect(),
        }
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.selections.iter().find(|s| s.name == name)
    }

    /// Replace the rows with `names`, keeping the choices already made for
    /// names that are still present.
    pub fn rebuild<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let previous = std::mem::take(&mut self.selections);
        self.selections = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                previous
                    .iter()
                    .find(|s| s.name == name)
                    .cloned()
                    .unwrap_or_else(|| Selection::new(name))
            })
            .collect();
    }

    /// Tick or untick a row. Unticking also drops its time.
    pub fn toggle(&mut self, name: &str, selected: bool) -> SlotbookResult<()> {
        let selection = self.find_mut(name)?;
        selection.selected = selected;
        if !selected {
            selection.time.clear();
        }
        Ok(())
    }

    /// Give a ticked row its time.
    pub fn set_time(&mut self, name: &str, time: &str) -> SlotbookResult<()> {
        let selection = self.find_mut(name)?;
        if !selection.selected {
            return Err(SlotbookError::validation(format!(
                "'{}' must be selected before a time is set",
                name
            )));
        }
        selection.time = time.trim().to_string();
        Ok(())
    }

    pub fn select_all(&mut self) {
        for selection in &mut self.selections {
            selection.selected = true;
        }
    }

    /// Untick every row and drop every time.
    pub fn clear_all(&mut self) {
        for selection in &mut self.selections {
            selection.clear();
        }
    }

    /// Return to the cleared state after a batch has been stored.
    pub fn reset(&mut self) {
        self.clear_all();
    }

    pub fn build_event_batch(&self, date: &str) -> SlotbookResult<Vec<NewEvent>> {
        build_event_batch(&self.selections, date)
    }

    fn find_mut(&mut self, name: &str) -> SlotbookResult<&mut Selection> {
        self.selections
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| SlotbookError::NotFound(format!("selection '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(name: &str, selected: bool, time: &str) -> Selection {
        Selection {
            name: name.to_string(),
            selected,
            time: time.to_string(),
        }
    }

    #[test]
    fn batch_keeps_only_selected_and_timed() {
        let selections = vec![
            selection("Alice", true, "09:00 AM"),
            selection("Bob", false, ""),
        ];

        let batch = build_event_batch(&selections, "1/1/2026").unwrap();
        assert_eq!(batch, vec![NewEvent::new("Alice", "1/1/2026", "09:00 AM")]);
    }

    #[test]
    fn blank_time_is_not_eligible() {
        let selections = vec![selection("Alice", true, "   ")];

        assert!(!selections[0].is_eligible());
        match build_event_batch(&selections, "1/1/2026") {
            Err(SlotbookError::Validation(msg)) => assert_eq!(msg, "no valid selections"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn batch_trims_date_and_time() {
        let selections = vec![selection("Alice", true, " 09:00 AM ")];

        let batch = build_event_batch(&selections, " 1/1/2026 ").unwrap();
        assert_eq!(batch, vec![NewEvent::new("Alice", "1/1/2026", "09:00 AM")]);
    }

    #[test]
    fn batch_uses_each_persons_time_and_shared_date() {
        let selections = vec![
            selection("Alice", true, "09:00 AM"),
            selection("Bob", true, "10:15 AM"),
            selection("Carol", true, ""),
            selection("Dan", false, "11:00 AM"),
        ];

        let batch = build_event_batch(&selections, "5/3/2026").unwrap();
        assert_eq!(batch.len(), 2);
        for event in &batch {
            let origin = selections.iter().find(|s| s.name == event.name).unwrap();
            assert_eq!(event.time, origin.time);
            assert_eq!(event.date, "5/3/2026");
        }
    }

    #[test]
    fn batch_requires_date() {
        let selections = vec![selection("Alice", true, "09:00 AM")];
        let err = build_event_batch(&selections, "  ").unwrap_err();
        assert!(matches!(err, SlotbookError::Validation(ref m) if m == "missing date"));
    }

    #[test]
    fn batch_requires_an_eligible_selection() {
        let selections = vec![selection("Alice", true, ""), selection("Bob", false, "09:00 AM")];
        let err = build_event_batch(&selections, "1/1/2026").unwrap_err();
        assert!(matches!(err, SlotbookError::Validation(ref m) if m == "no valid selections"));

        assert!(build_event_batch(&[], "1/1/2026").is_err());
    }

    #[test]
    fn untick_clears_time() {
        let mut sheet = SelectionSheet::from_names(["Alice"]);
        sheet.toggle("Alice", true).unwrap();
        sheet.set_time("Alice", "09:00 AM").unwrap();
        sheet.toggle("Alice", false).unwrap();

        assert_eq!(sheet.get("Alice"), Some(&Selection::new("Alice")));
    }

    #[test]
    fn time_needs_a_ticked_row() {
        let mut sheet = SelectionSheet::from_names(["Alice"]);
        assert!(matches!(
            sheet.set_time("Alice", "09:00 AM"),
            Err(SlotbookError::Validation(_))
        ));
        assert!(matches!(
            sheet.toggle("Zed", true),
            Err(SlotbookError::NotFound(_))
        ));
    }

    #[test]
    fn select_all_then_clear_all() {
        let mut sheet = SelectionSheet::from_names(["Alice", "Bob"]);
        sheet.select_all();
        sheet.set_time("Bob", "05:00 PM").unwrap();
        assert!(sheet.selections().iter().all(|s| s.selected));

        sheet.clear_all();
        assert!(
            sheet
                .selections()
                .iter()
                .all(|s| !s.selected && s.time.is_empty())
        );
    }

    #[test]
    fn rebuild_keeps_choices_for_remaining_names() {
        let mut sheet = SelectionSheet::from_names(["Alice", "Bob"]);
        sheet.toggle("Alice", true).unwrap();
        sheet.set_time("Alice", "09:00 AM").unwrap();
        sheet.toggle("Bob", true).unwrap();

        sheet.rebuild(["Alice", "Carol"]);

        let names: Vec<&str> = sheet.selections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
        assert!(sheet.get("Alice").unwrap().is_eligible());
        assert!(!sheet.get("Carol").unwrap().selected);
    }

    #[test]
    fn sheet_builds_batch_and_resets() {
        let mut sheet = SelectionSheet::from_names(["Alice", "Bob"]);
        sheet.toggle("Bob", true).unwrap();
        sheet.set_time("Bob", "07:45 PM").unwrap();

        let batch = sheet.build_event_batch("1/1/2026").unwrap();
        assert_eq!(batch, vec![NewEvent::new("Bob", "1/1/2026", "07:45 PM")]);

        sheet.reset();
        assert!(sheet.selections().iter().all(|s| !s.is_eligible()));
    }
}
