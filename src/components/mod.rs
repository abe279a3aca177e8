//! UI Components
//!
//! Leptos components for the todo page.

mod error_notice;
mod new_todo_form;
mod status_message;
mod todo_list;
mod todo_row;

pub use error_notice::ErrorNotice;
pub use new_todo_form::NewTodoForm;
pub use status_message::StatusMessage;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
