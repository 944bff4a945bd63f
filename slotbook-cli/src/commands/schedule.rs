use anyhow::{Result, bail};
use dialoguer::{Input, MultiSelect};
use owo_colors::OwoColorize;
use slotbook_core::Store;
use slotbook_core::registry::PersonRegistry;
use slotbook_core::selection::SelectionSheet;
use slotbook_core::service::EventService;

use crate::input::{assignment_from_input, day_from_input, time_from_input};
use crate::render::pluralize;

pub fn run(store: &Store, date: Option<String>, assignments: Vec<String>) -> Result<()> {
    let names = PersonRegistry::new(store).list_names()?;
    if names.is_empty() {
        bail!(
            "No names registered.\n\n\
            Add people first with:\n  \
            slotbook names add <NAME>"
        );
    }

    let mut sheet = SelectionSheet::from_names(names.clone());

    let date = match date {
        Some(d) => day_from_input(&d)?,
        None => prompt_with_retry("  Date", day_from_input)?,
    };

    if assignments.is_empty() {
        choose_interactively(&mut sheet, &names)?;
    } else {
        for assignment in &assignments {
            let (name, time) = assignment_from_input(assignment)?;
            let registered = resolve_name(&names, &name)?;
            sheet.toggle(registered, true)?;
            sheet.set_time(registered, &time)?;
        }
    }

    let stored = EventService::new(store).schedule(&mut sheet, &date)?;
    println!(
        "{}",
        format!(
            "Saved {} {} for {}",
            stored.len(),
            pluralize("event", stored.len()),
            date
        )
        .green()
    );

    Ok(())
}

/// Tick people from a list, then ask each one's time.
fn choose_interactively(sheet: &mut SelectionSheet, names: &[String]) -> Result<()> {
    let chosen = MultiSelect::new()
        .with_prompt("  Who? (space to select, enter to confirm)")
        .items(names)
        .interact()?;

    for index in chosen {
        let name = &names[index];
        sheet.toggle(name, true)?;
        let time = prompt_with_retry(&format!("  Time for {}", name), time_from_input)?;
        sheet.set_time(name, &time)?;
    }

    Ok(())
}

/// Match typed names against the registry, ignoring case.
fn resolve_name<'a>(names: &'a [String], input: &str) -> Result<&'a str> {
    names
        .iter()
        .find(|n| n.eq_ignore_ascii_case(input))
        .map(String::as_str)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "'{}' is not registered. Available: {}",
                input,
                names.join(", ")
            )
        })
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<String>
where
    F: Fn(&str) -> Result<String>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
