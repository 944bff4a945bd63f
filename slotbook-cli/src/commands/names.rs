use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::AddNameOutcome;
use slotbook_core::Store;
use slotbook_core::registry::PersonRegistry;

pub fn add(store: &Store, name: &str) -> Result<()> {
    let registry = PersonRegistry::new(store);

    match registry.add_name(name)? {
        AddNameOutcome::Added => println!("{}", format!("{} added to list", name.trim()).green()),
        AddNameOutcome::AlreadyExists => {
            println!("{}", format!("{} already exists", name.trim()).yellow())
        }
    }

    Ok(())
}

pub fn list(store: &Store) -> Result<()> {
    let names = PersonRegistry::new(store).list_names()?;

    if names.is_empty() {
        println!("{}", "No names yet. Add one with: slotbook names add <NAME>".dimmed());
        return Ok(());
    }

    for name in names {
        println!("  {}", name);
    }

    Ok(())
}

pub fn remove(store: &Store, name: &str) -> Result<()> {
    PersonRegistry::new(store).delete_name(name)?;
    println!("Removed {} (existing events are kept)", name.trim());
    Ok(())
}

pub fn sync(store: &Store) -> Result<()> {
    let added = PersonRegistry::new(store).register_event_names()?;

    if added.is_empty() {
        println!("{}", "All event names are already registered".dimmed());
        return Ok(());
    }

    for name in &added {
        println!("  {} {}", "+".green(), name);
    }

    Ok(())
}
