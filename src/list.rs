//! List Operations
//!
//! The only mutation paths for the entry collection. Pure functions so the
//! behavior is testable off the DOM; the store helpers wrap these.

use crate::models::TodoEntry;

/// Prepend a new incomplete entry. Empty titles are rejected (the submit
/// button is disabled in that state, this is the backstop).
pub fn submit_entry(entries: &mut Vec<TodoEntry>, title: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    entries.insert(0, TodoEntry::new(title));
    true
}

/// Remove the entry with the given id. No-op when absent.
pub fn remove_entry(entries: &mut Vec<TodoEntry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id != id);
    entries.len() != before
}

/// Flip completion for the entry with the given id. No-op when absent.
pub fn toggle_entry(entries: &mut Vec<TodoEntry>, id: &str) -> bool {
    match entries.iter_mut().find(|e| e.id == id) {
        Some(entry) => {
            entry.completed = !entry.completed;
            true
        }
        None => false,
    }
}

/// Count of entries not yet completed
pub fn incomplete_count(entries: &[TodoEntry]) -> usize {
    entries.iter().filter(|e| !e.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoEntry;

    fn seed_entries() -> Vec<TodoEntry> {
        vec![
            TodoEntry::with_id("001", "必做之事-1", false),
            TodoEntry::with_id("002", "非必做之事", true),
        ]
    }

    #[test]
    fn test_submit_prepends_incomplete_entry() {
        let mut entries = seed_entries();
        assert!(submit_entry(&mut entries, "Buy milk"));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "Buy milk");
        assert!(!entries[0].completed);
        assert_eq!(entries[1].id, "001");
        assert_eq!(entries[2].id, "002");
        assert_eq!(incomplete_count(&entries), 2);
    }

    #[test]
    fn test_submit_generates_unique_ids() {
        let mut entries = Vec::new();
        submit_entry(&mut entries, "one");
        submit_entry(&mut entries, "two");
        submit_entry(&mut entries, "three");

        assert_eq!(entries.len(), 3);
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                assert_ne!(entries[i].id, entries[j].id);
            }
        }
    }

    #[test]
    fn test_submit_empty_title_rejected() {
        let mut entries = seed_entries();
        assert!(!submit_entry(&mut entries, ""));
        assert_eq!(entries, seed_entries());
    }

    #[test]
    fn test_toggle_flips_status() {
        let mut entries = seed_entries();
        assert!(toggle_entry(&mut entries, "001"));
        assert!(entries[0].completed);
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut entries = seed_entries();
        toggle_entry(&mut entries, "002");
        toggle_entry(&mut entries, "002");
        assert!(entries[1].completed);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut entries = seed_entries();
        assert!(!toggle_entry(&mut entries, "nope"));
        assert_eq!(entries, seed_entries());
    }

    #[test]
    fn test_remove_deletes_exactly_one() {
        let mut entries = seed_entries();
        assert!(remove_entry(&mut entries, "002"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "001");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut entries = seed_entries();
        assert!(!remove_entry(&mut entries, "nope"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_counts_add_up_after_every_mutation() {
        let mut entries = seed_entries();
        let check = |entries: &[TodoEntry]| {
            let complete = entries.iter().filter(|e| e.completed).count();
            assert_eq!(incomplete_count(entries) + complete, entries.len());
        };

        submit_entry(&mut entries, "Buy milk");
        check(&entries);
        toggle_entry(&mut entries, "001");
        check(&entries);
        remove_entry(&mut entries, "002");
        check(&entries);
        toggle_entry(&mut entries, "001");
        check(&entries);
    }
}
