//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod new_todo_form;
mod pager;
mod search_bar;
mod todo_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use new_todo_form::NewTodoForm;
pub use pager::Pager;
pub use search_bar::SearchBar;
pub use todo_row::TodoRow;
