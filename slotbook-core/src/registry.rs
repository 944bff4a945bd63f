//! The set of people that can be scheduled.

use tracing::info;

use crate::error::{SlotbookError, SlotbookResult};
use crate::person::AddNameOutcome;
use crate::store::Store;

pub struct PersonRegistry<'a> {
    store: &'a Store,
}

impl<'a> PersonRegistry<'a> {
    pub fn new(store: &'a Store) -> Self {
        PersonRegistry { store }
    }

    /// Register a name. Surrounding whitespace is ignored and an existing
    /// name (compared ASCII case-insensitively) is reported, not duplicated.
    pub fn add_name(&self, name: &str) -> SlotbookResult<AddNameOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SlotbookError::validation("name must not be empty"));
        }

        if self.store.name_exists(name)? || !self.store.insert_name(name)? {
            return Ok(AddNameOutcome::AlreadyExists);
        }

        info!(name, "registered name");
        Ok(AddNameOutcome::Added)
    }

    pub fn list_names(&self) -> SlotbookResult<Vec<String>> {
        self.store.all_names()
    }

    pub fn name_exists(&self, name: &str) -> SlotbookResult<bool> {
        self.store.name_exists(name.trim())
    }

    /// Remove a name from the registry. Its events stay where they are.
    pub fn delete_name(&self, name: &str) -> SlotbookResult<()> {
        let name = name.trim();
        if !self.store.delete_name(name)? {
            return Err(SlotbookError::NotFound(format!("name '{}'", name)));
        }
        Ok(())
    }

    /// Register every name that appears on stored events but not in the
    /// registry. Returns the names that were added.
    pub fn register_event_names(&self) -> SlotbookResult<Vec<String>> {
        let mut added = Vec::new();
        for name in self.store.all_event_names()? {
            if name.trim().is_empty() {
                continue;
            }
            if self.add_name(&name)? == AddNameOutcome::Added {
                added.push(name.trim().to_string());
            }
        }
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NewEvent;

    #[test]
    fn add_name_twice_lists_once() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);

        assert_eq!(registry.add_name("Alice").unwrap(), AddNameOutcome::Added);
        assert_eq!(
            registry.add_name("Alice").unwrap(),
            AddNameOutcome::AlreadyExists
        );
        assert_eq!(registry.list_names().unwrap(), vec!["Alice"]);
    }

    #[test]
    fn add_name_trims_and_ignores_case() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);

        registry.add_name("  Mahendra ").unwrap();
        assert_eq!(
            registry.add_name("mahendra").unwrap(),
            AddNameOutcome::AlreadyExists
        );
        assert_eq!(registry.list_names().unwrap(), vec!["Mahendra"]);
        assert!(registry.name_exists("MAHENDRA").unwrap());
    }

    #[test]
    fn case_folding_is_ascii_only() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);

        assert_eq!(registry.add_name("Élise").unwrap(), AddNameOutcome::Added);
        assert_eq!(registry.add_name("élise").unwrap(), AddNameOutcome::Added);
        assert_eq!(registry.list_names().unwrap().len(), 2);
    }

    #[test]
    fn blank_name_is_rejected() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);

        assert!(matches!(
            registry.add_name("   "),
            Err(SlotbookError::Validation(_))
        ));
        assert!(registry.list_names().unwrap().is_empty());
    }

    #[test]
    fn delete_name_leaves_events() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);
        registry.add_name("Bob").unwrap();
        store
            .insert_event(&NewEvent::new("Bob", "1/1/2026", "09:00 AM"))
            .unwrap();

        registry.delete_name("Bob").unwrap();

        assert!(!registry.name_exists("Bob").unwrap());
        assert_eq!(store.events_by_name("Bob").unwrap().len(), 1);
    }

    #[test]
    fn delete_unknown_name_is_not_found() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);
        assert!(matches!(
            registry.delete_name("Nobody"),
            Err(SlotbookError::NotFound(_))
        ));
    }

    #[test]
    fn register_event_names_adds_only_unseen() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);
        registry.add_name("Alice").unwrap();
        store
            .insert_events(&[
                NewEvent::new("Alice", "1/1/2026", "09:00 AM"),
                NewEvent::new("Gopal", "1/1/2026", "10:00 AM"),
                NewEvent::new("Gopal", "2/1/2026", "10:00 AM"),
            ])
            .unwrap();

        assert_eq!(registry.register_event_names().unwrap(), vec!["Gopal"]);
        assert!(registry.register_event_names().unwrap().is_empty());
        assert_eq!(registry.list_names().unwrap(), vec!["Alice", "Gopal"]);
    }

    #[test]
    fn register_event_names_reports_trimmed_names() {
        let store = Store::open_in_memory().unwrap();
        let registry = PersonRegistry::new(&store);
        store
            .insert_event(&NewEvent::new(" Bob", "1/1/2026", "09:00 AM"))
            .unwrap();

        assert_eq!(registry.register_event_names().unwrap(), vec!["Bob"]);
        assert_eq!(registry.list_names().unwrap(), vec!["Bob"]);
    }
}
