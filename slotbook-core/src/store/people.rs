use super::*;

use crate::person::Person;

impl Store {
    /// Insert a name unless an equal one (case-insensitive) exists.
    /// Returns true if a row was inserted.
    pub fn insert_name(&self, name: &str) -> SlotbookResult<bool> {
        let inserted = self
            .conn
            .execute("INSERT OR IGNORE INTO people (name) VALUES (?1)", params![name])?;
        debug!(name, inserted, "insert name");
        Ok(inserted > 0)
    }

    /// All registered names, ascending.
    pub fn all_names(&self) -> SlotbookResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM people ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }

    pub fn people(&self) -> SlotbookResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM people ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Person {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn name_exists(&self, name: &str) -> SlotbookResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM people WHERE name = ?1 LIMIT 1)",
            params![name],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Remove a registered name. Events are never touched.
    /// Returns true if a row was removed.
    pub fn delete_name(&self, name: &str) -> SlotbookResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM people WHERE name = ?1", params![name])?;
        Ok(removed > 0)
    }

    pub fn find_person(&self, name: &str) -> SlotbookResult<Option<Person>> {
        let person = self
            .conn
            .query_row(
                "SELECT id, name FROM people WHERE name = ?1",
                params![name],
                |row| {
                    Ok(Person {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_name_ignores_duplicates_case_insensitively() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.insert_name("Alice").unwrap());
        assert!(!store.insert_name("Alice").unwrap());
        assert!(!store.insert_name("alice").unwrap());
        assert_eq!(store.all_names().unwrap(), vec!["Alice"]);
    }

    #[test]
    fn names_are_listed_ascending() {
        let store = Store::open_in_memory().unwrap();
        for name in ["Vishnu", "Gopal", "Ruben"] {
            store.insert_name(name).unwrap();
        }
        assert_eq!(store.all_names().unwrap(), vec!["Gopal", "Ruben", "Vishnu"]);
    }

    #[test]
    fn name_exists_and_find_person() {
        let store = Store::open_in_memory().unwrap();
        store.insert_name("Bob").unwrap();

        assert!(store.name_exists("Bob").unwrap());
        assert!(store.name_exists("BOB").unwrap());
        assert!(!store.name_exists("Carol").unwrap());

        let person = store.find_person("bob").unwrap().unwrap();
        assert_eq!(person.name, "Bob");
        assert!(store.find_person("Carol").unwrap().is_none());
    }

    #[test]
    fn delete_name_reports_whether_removed() {
        let store = Store::open_in_memory().unwrap();
        store.insert_name("Bob").unwrap();
        assert!(store.delete_name("Bob").unwrap());
        assert!(!store.delete_name("Bob").unwrap());
        assert!(store.people().unwrap().is_empty());
    }
}
