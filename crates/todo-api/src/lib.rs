//! Todo API
//!
//! Typed client for the remote todos collection.

mod client;
mod error;
mod models;

pub use client::{parse_id, TodoClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use models::{NewTodo, Todo};
