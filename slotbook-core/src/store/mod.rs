//! SQLite-backed storage for people and events.
//!
//! `Store` owns a single connection. Callers construct one and lend it to the
//! registry and the event service; nothing here is global.

mod events;
mod people;

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::error::SlotbookResult;
use crate::event::{Event, NewEvent};

const SCHEMA_VERSION: i64 = 2;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE
);

CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL COLLATE NOCASE,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_events_name ON events(name);
";

/// Version 1 stored event names with binary collation. Rebuild the table so
/// event lookups fold case like the people table.
const EVENTS_NOCASE_MIGRATION: &str = "
BEGIN;
CREATE TABLE events_v2 (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL COLLATE NOCASE,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
INSERT INTO events_v2 (id, name, date, time, created_at)
    SELECT id, name, date, time, created_at FROM events;
DROP TABLE events;
ALTER TABLE events_v2 RENAME TO events;
CREATE INDEX IF NOT EXISTS idx_events_name ON events(name);
COMMIT;
";

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> SlotbookResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");
        Self::from_connection(conn)
    }

    /// A private in-memory database, gone when the store is dropped.
    pub fn open_in_memory() -> SlotbookResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> SlotbookResult<Self> {
        let store = Store { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> SlotbookResult<()> {
        let version: i64 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        debug!(from = version, to = SCHEMA_VERSION, "migrating schema");
        if version == 0 {
            self.conn.execute_batch(SCHEMA)?;
        } else if version < 2 {
            self.conn.execute_batch(EVENTS_NOCASE_MIGRATION)?;
        }
        self.conn
            .pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(())
    }
}

/// Epoch milliseconds used for `created_at`.
fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn map_event_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        created_at: row.get(4)?,
    })
}
