//! Remote Actions
//!
//! Calls the remote collection and writes successful results into the cache.

use todo_api::{ApiError, Todo, TodoClient};
use tracing::{error, info, warn};

use crate::store::{
    store_find_todo, store_prepend_todo, store_remove_todo, store_set_load_state,
    store_set_todos, store_update_todo, LoadState, TodoStore,
};

pub async fn load_todos(store: TodoStore, client: &TodoClient) {
    store_set_load_state(&store, LoadState::Loading);
    match client.list().await {
        Ok(todos) => {
            info!(count = todos.len(), "Loaded todos");
            store_set_todos(&store, todos);
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch todos");
            store_set_load_state(&store, LoadState::Failed(e.to_string()));
        }
    }
}

pub async fn add_todo(store: TodoStore, client: &TodoClient, title: &str) -> Result<Todo, ApiError> {
    let created = client.create(title).await.inspect_err(|e| {
        warn!(error = %e, "Create failed");
    })?;
    let cached = store_prepend_todo(&store, created);
    info!(id = cached.id, "Added todo");
    Ok(cached)
}

/// PUT the full record, then cache what the server returned
pub async fn save_todo(store: TodoStore, client: &TodoClient, todo: Todo) -> Result<Todo, ApiError> {
    let updated = client.update(&todo).await.inspect_err(|e| {
        warn!(id = todo.id, error = %e, "Update failed");
    })?;
    store_update_todo(&store, updated.clone());
    info!(id = updated.id, "Saved todo");
    Ok(updated)
}

pub async fn delete_todo(store: TodoStore, client: &TodoClient, id: u32) -> Result<(), ApiError> {
    client.delete(id).await.inspect_err(|e| {
        warn!(id, error = %e, "Delete failed");
    })?;
    store_remove_todo(&store, id);
    info!(id, "Deleted todo");
    Ok(())
}

/// Cached copy first; falls back to the remote record
pub async fn fetch_todo(store: TodoStore, client: &TodoClient, id: u32) -> Result<Option<Todo>, ApiError> {
    if let Some(todo) = store_find_todo(&store, id) {
        return Ok(Some(todo));
    }
    client.get(id).await.inspect_err(|e| {
        error!(id, error = %e, "Failed to fetch todo");
    })
}
