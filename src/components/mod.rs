//! UI Components
//!
//! Reusable Leptos components.

mod icon;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use icon::Icon;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
