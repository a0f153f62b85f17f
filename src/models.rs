//! Frontend Models
//!
//! Data structures for the to-do screen.

use uuid::Uuid;

/// To-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct TodoEntry {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl TodoEntry {
    /// New incomplete entry with a fresh id
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
        }
    }

    /// Entry with a known id (seed data and tests)
    pub fn with_id(id: &str, title: &str, completed: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            completed,
        }
    }
}
