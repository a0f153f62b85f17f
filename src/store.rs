//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The entry
//! collection is owned here; gesture and form components mutate it only
//! through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::TodoEntry;

/// Application state for the to-do screen
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All entries, newest first
    pub entries: Vec<TodoEntry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            // Demo seed entries
            entries: vec![
                TodoEntry::with_id("001", "必做之事-1", false),
                TodoEntry::with_id("002", "非必做之事", true),
            ],
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a new entry from submitted input text
pub fn store_submit_entry(store: &AppStore, title: &str) -> bool {
    let entries = store.entries();
    let mut entries = entries.write();
    list::submit_entry(&mut entries, title)
}

/// Remove an entry from the store by id
pub fn store_remove_entry(store: &AppStore, id: &str) -> bool {
    let entries = store.entries();
    let mut entries = entries.write();
    list::remove_entry(&mut entries, id)
}

/// Flip completion for an entry by id
pub fn store_toggle_entry(store: &AppStore, id: &str) -> bool {
    let entries = store.entries();
    let mut entries = entries.write();
    list::toggle_entry(&mut entries, id)
}
