//! New Todo Form Component
//!
//! Add trigger plus the open input flow: submit prepends, cancel discards.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_submit_entry, use_app_store};

/// Add-entry trigger and form
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (input_value, set_input_value) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = input_value.get();
        if title.is_empty() { return; }

        if store_submit_entry(&store, &title) {
            set_input_value.set(String::new());
            ctx.close_input();
        }
    };

    let cancel = move |_| {
        set_input_value.set(String::new());
        ctx.close_input();
    };

    view! {
        <button
            class="add-btn"
            disabled=move || ctx.input_open.get()
            on:click=move |_| ctx.open_input()
        >
            "Add Todo List"
        </button>

        {move || ctx.input_open.get().then(|| view! {
            <form class="new-todo-form" on:submit=submit>
                <input
                    type="text"
                    class="new-todo-input"
                    placeholder="Add new todo..."
                    prop:value=move || input_value.get()
                    on:input=move |ev| set_input_value.set(event_target_value(&ev))
                />
                <div class="btn-group">
                    <button
                        type="submit"
                        class=move || {
                            if input_value.get().is_empty() { "btn btn-disabled" } else { "btn" }
                        }
                        disabled=move || input_value.get().is_empty()
                    >
                        "Submit"
                    </button>
                    <button type="button" class="btn btn-cancel" on:click=cancel>
                        "Cancel"
                    </button>
                </div>
            </form>
        })}
    }
}
