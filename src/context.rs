//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the add-entry form is open - read
    pub input_open: ReadSignal<bool>,
    /// Whether the add-entry form is open - write
    set_input_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(input_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            input_open: input_open.0,
            set_input_open: input_open.1,
        }
    }

    /// Open the add-entry form (disables the add trigger while open)
    pub fn open_input(&self) {
        self.set_input_open.set(true);
    }

    /// Close the add-entry form
    pub fn close_input(&self) {
        self.set_input_open.set(false);
    }
}
