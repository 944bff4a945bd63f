//! Registered people.

use serde::{Deserialize, Serialize};

/// A registered person. Names are unique, compared ASCII case-insensitively:
/// "bob" matches "Bob" but "élise" does not match "Élise".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

/// Result of adding a name to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddNameOutcome {
    Added,
    AlreadyExists,
}
