use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use slotbook_core::Store;
use slotbook_core::service::EventService;

use crate::input::{day_from_input, time_from_input};
use crate::render::Render;

pub fn run(
    store: &Store,
    id: i64,
    name: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let service = EventService::new(store);
    let current = service.get_event(id)?;
    let interactive = name.is_none() && date.is_none() && time.is_none();

    let (name, date, time) = if interactive {
        println!("  {}", current.render());
        (
            prompt_default("  Name", &current.name, |s| Ok(s.trim().to_string()))?,
            prompt_default("  Date", &current.date, day_from_input)?,
            prompt_default("  Time", &current.time, time_from_input)?,
        )
    } else {
        (
            name.unwrap_or_else(|| current.name.clone()),
            match date {
                Some(d) => day_from_input(&d)?,
                None => current.date.clone(),
            },
            match time {
                Some(t) => time_from_input(&t)?,
                None => current.time.clone(),
            },
        )
    };

    let edited = service.edit_event(id, &name, &date, &time)?;
    println!("{}", "Event updated".green());
    println!("  {}", edited.render());

    Ok(())
}

/// Prompt with the current value pre-filled, retrying on parse errors.
fn prompt_default<F>(prompt: &str, current: &str, parse: F) -> Result<String>
where
    F: Fn(&str) -> Result<String>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
