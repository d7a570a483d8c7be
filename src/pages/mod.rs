//! Routed Pages

mod not_found;
mod todo_detail;
mod todo_list;

pub use not_found::NotFound;
pub use todo_detail::TodoDetail;
pub use todo_list::TodoList;
