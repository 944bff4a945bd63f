use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use slotbook_core::Store;
use slotbook_core::service::EventService;

use crate::render::Render;

pub fn run(store: &Store, id: i64, force: bool) -> Result<()> {
    let service = EventService::new(store);
    let event = service.get_event(id)?;

    if !force {
        println!("  {}", event.render());
        let confirmed = Confirm::new()
            .with_prompt("Delete this event?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    service.remove_event(id)?;
    println!("{}", "Event deleted".red());

    Ok(())
}
