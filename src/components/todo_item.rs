//! Todo Item Component
//!
//! Per-entry gesture view. Horizontal drag drives the row transform and the
//! two affordance layers behind it; releasing past the threshold commits
//! through the swipe signals bound in TodoList.

use leptos::prelude::*;
use leptos_swipe::{clamp_offset, complete_opacity, delete_opacity, make_on_pointerdown, SwipeSignals};

use crate::components::Icon;
use crate::models::TodoEntry;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single swipeable entry row
#[component]
pub fn TodoItem(entry: TodoEntry, swipe: SwipeSignals) -> impl IntoView {
    let store = use_app_store();
    let id = entry.id.clone();

    // Completion is read live from the store so the background transition
    // runs on the same DOM node instead of a rebuilt row.
    let completed = {
        let id = id.clone();
        Memo::new(move |_| {
            store.entries().read().iter().any(|e| e.id == id && e.completed)
        })
    };

    let dragging = {
        let id = id.clone();
        Memo::new(move |_| swipe.active_id_read.get().as_deref() == Some(id.as_str()))
    };
    let offset = Memo::new(move |_| if dragging.get() { swipe.offset_x_read.get() } else { 0 });

    let row_class = move || if completed.get() { "todo-row completed" } else { "todo-row" };

    // Transform follows the finger (clamped for display); on release the
    // gesture state clears and the row springs back over 300ms.
    let row_style = move || {
        if dragging.get() {
            format!(
                "transform: translateX({}px); transition: background-color 300ms;",
                clamp_offset(offset.get())
            )
        } else {
            "transform: translateX(0); transition: transform 300ms, background-color 300ms;"
                .to_string()
        }
    };

    let complete_style = move || {
        if dragging.get() && offset.get() > 0 {
            format!("opacity: {:.3}; transition: none;", complete_opacity(offset.get()))
        } else if dragging.get() {
            // Suppressed side while dragging the other way
            "opacity: 0; transition: opacity 300ms;".to_string()
        } else {
            "opacity: 0; transition: opacity 150ms;".to_string()
        }
    };

    let delete_style = move || {
        if dragging.get() && offset.get() < 0 {
            format!("opacity: {:.3}; transition: none;", delete_opacity(offset.get()))
        } else if dragging.get() {
            "opacity: 0; transition: opacity 300ms;".to_string()
        } else {
            "opacity: 0; transition: opacity 150ms;".to_string()
        }
    };

    let on_pointerdown = make_on_pointerdown(swipe, entry.id.clone());

    view! {
        <div class="todo-display-group">
            <div class="sign-group">
                <div class="sign sign-complete" style=complete_style>
                    <Icon name="checkmark" size=40 color="white" />
                </div>
                <div class="sign sign-delete" style=delete_style>
                    <Icon name="trash" size=40 color="white" />
                </div>
            </div>
            <div class=row_class style=row_style on:pointerdown=on_pointerdown>
                <span class="todo-text">{entry.title.clone()}</span>
            </div>
        </div>
    }
}
