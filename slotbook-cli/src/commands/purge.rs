use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::Store;
use slotbook_core::service::EventService;

use crate::render::pluralize;

pub fn run(store: &Store) -> Result<()> {
    let removed = EventService::new(store).purge_expired()?;

    if removed == 0 {
        println!("{}", "Nothing to purge".dimmed());
    } else {
        println!("Removed {} expired {}", removed, pluralize("event", removed));
    }

    Ok(())
}
