use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::Store;
use slotbook_core::config::SlotbookConfig;
use slotbook_core::service::EventService;
use slotbook_core::share::{ShareOutcome, Sharer};

use crate::render::render_events;

pub struct EventsOptions {
    pub share: bool,
    pub app: Option<String>,
    pub json: bool,
}

/// Upcoming events for `name`, or for everyone. Expired events are purged
/// before listing.
pub async fn run(
    store: &Store,
    config: &SlotbookConfig,
    name: Option<&str>,
    options: EventsOptions,
) -> Result<()> {
    let service = EventService::new(store);

    let (events, heading) = match name {
        Some(name) => (
            service.list_upcoming_for_person(name)?,
            format!("Events for {}", name),
        ),
        None => (service.list_all_upcoming()?, "Upcoming events".to_string()),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if options.share {
        let summary = config
            .summary_formatter()
            .with_names(name.is_none())
            .render(&events, &heading);
        let app = options.app.as_deref().or(config.share.app.as_deref());

        let mut sharer = Sharer::new(std::io::stdout());
        if let ShareOutcome::App(app) = sharer.share(&summary, app).await? {
            println!("{}", format!("Shared with {}", app).green());
        }
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", config.empty_message.dimmed());
        return Ok(());
    }

    println!("{}", heading.bold());
    println!("{}", render_events(&events, config.labels.as_ref()));

    Ok(())
}

/// Every stored event for `name`, newest first.
pub fn history(store: &Store, name: &str) -> Result<()> {
    let events = EventService::new(store).history_for_person(name)?;

    if events.is_empty() {
        println!("{}", format!("No events found for {}", name).dimmed());
        return Ok(());
    }

    println!("{}", format!("Events for {}", name).bold());
    println!("{}", render_events(&events, None));

    Ok(())
}
