//! Todo List Component
//!
//! Legend with derived counts plus the swipeable entry list. Owns the swipe
//! signal bundle and the single commit point into the store.

use leptos::prelude::*;
use leptos_swipe::{bind_global_pointerup, create_swipe_signals, SwipeAction};

use crate::components::TodoItem;
use crate::list;
use crate::store::{store_remove_entry, store_toggle_entry, use_app_store, AppStateStoreFields};

/// Entry list with gesture commit handling
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let swipe = create_swipe_signals();

    // Commits arrive from the document-level pointerup listener; the
    // collection is only ever written here, in the component owning it.
    bind_global_pointerup(swipe, move |id, action| {
        web_sys::console::log_1(&format!("[SWIPE] commit: id={}, action={:?}", id, action).into());
        match action {
            SwipeAction::Complete => {
                store_toggle_entry(&store, &id);
            }
            SwipeAction::Delete => {
                store_remove_entry(&store, &id);
            }
        }
    });

    let incomplete = move || list::incomplete_count(&store.entries().read());
    let total = move || store.entries().read().len();

    view! {
        <div class="legend-row">
            <div class="legend-box">
                <div class="legend-swatch swatch-incomplete"></div>
                <span class="legend-text">": Incomplete"</span>
            </div>
            <div class="legend-box">
                <span class="legend-text">{move || format!("Incomplete Item : {}", incomplete())}</span>
            </div>
        </div>
        <div class="legend-row">
            <div class="legend-box">
                <div class="legend-swatch swatch-complete"></div>
                <span class="legend-text">": Complete"</span>
            </div>
            <div class="legend-box">
                <span class="legend-text">{move || format!("Total Item : {}", total())}</span>
            </div>
        </div>

        <div class="todo-list">
            <For
                each=move || store.entries().get()
                key=|entry| entry.id.clone()
                children=move |entry| {
                    view! { <TodoItem entry=entry swipe=swipe /> }
                }
            />
        </div>
    }
}
