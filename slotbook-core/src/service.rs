//! Listing, editing and expiring stored events.
//!
//! Listings purge expired events first, so anything they return is today or
//! later. Each "today"-dependent call has an `_on` form taking the day
//! explicitly.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{SlotbookError, SlotbookResult};
use crate::event::{Event, sort_by_name_then_schedule};
use crate::selection::SelectionSheet;
use crate::store::Store;
use crate::when::local_today;

pub struct EventService<'a> {
    store: &'a Store,
}

impl<'a> EventService<'a> {
    pub fn new(store: &'a Store) -> Self {
        EventService { store }
    }

    /// Store the eligible rows of `sheet` as events on `date`, then clear the
    /// sheet. On error nothing is stored and the sheet is left as it was.
    pub fn schedule(&self, sheet: &mut SelectionSheet, date: &str) -> SlotbookResult<Vec<Event>> {
        let batch = sheet.build_event_batch(date.trim())?;
        let stored = self.store.insert_events(&batch)?;
        sheet.reset();
        Ok(stored)
    }

    pub fn list_upcoming_for_person(&self, name: &str) -> SlotbookResult<Vec<Event>> {
        self.list_upcoming_for_person_on(name, local_today())
    }

    pub fn list_upcoming_for_person_on(
        &self,
        name: &str,
        today: NaiveDate,
    ) -> SlotbookResult<Vec<Event>> {
        self.store.delete_expired_events(today)?;
        self.store.future_events_by_name(name, today)
    }

    pub fn list_all_upcoming(&self) -> SlotbookResult<Vec<Event>> {
        self.list_all_upcoming_on(local_today())
    }

    /// Everyone's upcoming events, by name, then day, then time.
    pub fn list_all_upcoming_on(&self, today: NaiveDate) -> SlotbookResult<Vec<Event>> {
        self.store.delete_expired_events(today)?;
        let mut events: Vec<Event> = self
            .store
            .all_events()?
            .into_iter()
            .filter(|e| e.is_upcoming(today))
            .collect();
        sort_by_name_then_schedule(&mut events);
        Ok(events)
    }

    /// Every event stored for `name`, newest first, expired ones included.
    pub fn history_for_person(&self, name: &str) -> SlotbookResult<Vec<Event>> {
        self.store.events_by_name(name)
    }

    pub fn get_event(&self, id: i64) -> SlotbookResult<Event> {
        self.store
            .get_event(id)?
            .ok_or_else(|| SlotbookError::NotFound(format!("event {}", id)))
    }

    /// Replace name, date and time of an event, keeping its id and creation
    /// timestamp.
    pub fn edit_event(
        &self,
        id: i64,
        name: &str,
        date: &str,
        time: &str,
    ) -> SlotbookResult<Event> {
        let (name, date, time) = (name.trim(), date.trim(), time.trim());
        for (field, value) in [("name", name), ("date", date), ("time", time)] {
            if value.is_empty() {
                return Err(SlotbookError::validation(format!("{} must not be empty", field)));
            }
        }

        let current = self.get_event(id)?;
        let edited = Event {
            name: name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            ..current
        };
        self.store.update_event(&edited)?;
        info!(id, "edited event");
        Ok(edited)
    }

    pub fn remove_event(&self, id: i64) -> SlotbookResult<()> {
        if !self.store.delete_event(id)? {
            return Err(SlotbookError::NotFound(format!("event {}", id)));
        }
        Ok(())
    }

    pub fn purge_expired(&self) -> SlotbookResult<usize> {
        self.purge_expired_on(local_today())
    }

    pub fn purge_expired_on(&self, today: NaiveDate) -> SlotbookResult<usize> {
        self.store.delete_expired_events(today)
    }
}
