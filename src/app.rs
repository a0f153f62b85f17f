//! Swipe-Todo Frontend App
//!
//! Single-screen layout: title, add-entry form, swipeable list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (input_open, set_input_open) = signal(false);
    provide_context(AppContext::new((input_open, set_input_open)));

    view! {
        <div class="app-view">
            <h1 class="app-title">"TODO LIST"</h1>
            <div class="list-view">
                <NewTodoForm />
                <TodoList />
            </div>
        </div>
    }
}
