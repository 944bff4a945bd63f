use super::*;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::SlotbookError;
use crate::event::sort_by_schedule;
use crate::when::{is_expired, parse_day};

const EVENT_COLUMNS: &str = "id, name, date, time, created_at";

impl Store {
    pub fn insert_event(&self, event: &NewEvent) -> SlotbookResult<Event> {
        let created_at = now_millis();
        self.conn.execute(
            "INSERT INTO events (name, date, time, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![event.name, event.date, event.time, created_at],
        )?;

        Ok(Event {
            id: self.conn.last_insert_rowid(),
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            created_at,
        })
    }

    /// Insert a batch in one transaction: either every event is stored or none.
    pub fn insert_events(&self, events: &[NewEvent]) -> SlotbookResult<Vec<Event>> {
        let tx = self.conn.unchecked_transaction()?;
        let created_at = now_millis();
        let mut stored = Vec::with_capacity(events.len());

        {
            let mut stmt = tx.prepare(
                "INSERT INTO events (name, date, time, created_at) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for event in events {
                stmt.execute(params![event.name, event.date, event.time, created_at])?;
                stored.push(Event {
                    id: tx.last_insert_rowid(),
                    name: event.name.clone(),
                    date: event.date.clone(),
                    time: event.time.clone(),
                    created_at,
                });
            }
        }

        tx.commit()?;
        info!(count = stored.len(), "inserted event batch");
        Ok(stored)
    }

    pub fn get_event(&self, id: i64) -> SlotbookResult<Option<Event>> {
        let event = self
            .conn
            .query_row(
                &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"),
                params![id],
                map_event_row,
            )
            .optional()?;
        Ok(event)
    }

    /// Events stored under `name` (ASCII case-insensitive), most recently
    /// created first.
    pub fn events_by_name(&self, name: &str) -> SlotbookResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE name = ?1
             ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![name], map_event_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Events for `name` on `today` or later, in schedule order.
    pub fn future_events_by_name(&self, name: &str, today: NaiveDate) -> SlotbookResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events_by_name(name)?
            .into_iter()
            .filter(|e| e.is_upcoming(today))
            .collect();
        sort_by_schedule(&mut events);
        Ok(events)
    }

    /// Every stored event, in no particular order.
    pub fn all_events(&self) -> SlotbookResult<Vec<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {EVENT_COLUMNS} FROM events"))?;
        let rows = stmt.query_map([], map_event_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Distinct names found on stored events, ascending. Names differing only
    /// in ASCII case count once.
    pub fn all_event_names(&self) -> SlotbookResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT name FROM events ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }

    /// Remove an event by id. Returns false if it was already gone.
    pub fn delete_event(&self, id: i64) -> SlotbookResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1", params![id])?;
        debug!(id, removed, "delete event");
        Ok(removed > 0)
    }

    /// Replace name, date and time of the event with the same id.
    /// `created_at` is left as stored.
    pub fn update_event(&self, event: &Event) -> SlotbookResult<()> {
        let updated = self.conn.execute(
            "UPDATE events SET name = ?1, date = ?2, time = ?3 WHERE id = ?4",
            params![event.name, event.date, event.time, event.id],
        )?;

        if updated == 0 {
            return Err(SlotbookError::NotFound(format!("event {}", event.id)));
        }
        Ok(())
    }

    /// Remove every event whose day is strictly before `today`.
    ///
    /// Days are compared as calendar days. Rows whose day does not parse are
    /// kept. Returns the number of removed events.
    pub fn delete_expired_events(&self, today: NaiveDate) -> SlotbookResult<usize> {
        let expired: Vec<i64> = self
            .all_events()?
            .into_iter()
            .filter(|event| {
                if parse_day(&event.date).is_none() {
                    warn!(id = event.id, date = %event.date, "keeping event with unparseable date");
                }
                is_expired(&event.date, today)
            })
            .map(|event| event.id)
            .collect();

        if expired.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("DELETE FROM events WHERE id = ?1")?;
            for id in &expired {
                stmt.execute(params![id])?;
            }
        }
        tx.commit()?;

        info!(count = expired.len(), %today, "purged expired events");
        Ok(expired.len())
    }
}
