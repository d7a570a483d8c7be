//! Todo Cache Store
//!
//! Client-side copy of the remote collection, using Leptos reactive_stores
//! for fine-grained reactivity. Written only after a remote call succeeds.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_api::Todo;

/// Progress of the initial collection fetch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    /// Whether a (re)fetch should be started when the list view mounts
    pub fn needs_fetch(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Failed(_))
    }
}

/// Cached collection with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Cached todos, newest local additions first
    pub todos: Vec<Todo>,
    pub load_state: LoadState,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_load_state(store: &TodoStore, state: LoadState) {
    store.load_state().set(state);
}

/// Replace the cache with a fresh fetch
pub fn store_set_todos(store: &TodoStore, todos: Vec<Todo>) {
    store.todos().set(todos);
    store.load_state().set(LoadState::Loaded);
}

/// Prepend a created todo; returns it with the id it was cached under
pub fn store_prepend_todo(store: &TodoStore, created: Todo) -> Todo {
    prepend_created(&mut store.todos().write(), created)
}

/// Update a todo in the store by ID
pub fn store_update_todo(store: &TodoStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: u32) {
    remove_todo(&mut store.todos().write(), id);
}

/// Look up a cached todo without subscribing to changes
pub fn store_find_todo(store: &TodoStore, id: u32) -> Option<Todo> {
    store
        .todos()
        .read_untracked()
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
}

// ========================
// Cache Operations
// ========================

/// The remote hands every created record the same id, so a colliding id
/// is replaced by one past the largest cached id.
pub fn prepend_created(todos: &mut Vec<Todo>, mut created: Todo) -> Todo {
    if todos.iter().any(|todo| todo.id == created.id) {
        created.id = next_free_id(todos);
    }
    todos.insert(0, created.clone());
    created
}

/// One past the largest cached id, or the lowest unused id once that
/// would overflow.
fn next_free_id(todos: &[Todo]) -> u32 {
    let max = todos.iter().map(|todo| todo.id).max().unwrap_or(0);
    max.checked_add(1).unwrap_or_else(|| {
        (1..=u32::MAX)
            .find(|candidate| !todos.iter().any(|todo| todo.id == *candidate))
            .unwrap_or(0)
    })
}

pub fn replace_todo(todos: &mut [Todo], updated: Todo) -> bool {
    match todos.iter_mut().find(|todo| todo.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) -> bool {
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    todos.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::new(1, "delectus aut autem"),
            Todo::new(2, "quis ut nam facilis"),
            Todo::new(3, "fugiat veniam minus"),
        ]
    }

    #[test]
    fn test_prepend_keeps_fresh_id() {
        let mut todos = sample();
        let cached = prepend_created(&mut todos, Todo::new(201, "new"));

        assert_eq!(cached.id, 201);
        assert_eq!(todos.len(), 4);
        assert_eq!(todos[0], cached);
    }

    #[test]
    fn test_prepend_reassigns_colliding_id() {
        let mut todos = sample();
        prepend_created(&mut todos, Todo::new(201, "first"));
        let second = prepend_created(&mut todos, Todo::new(201, "second"));

        assert_eq!(second.id, 202);
        let ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![202, 201, 1, 2, 3]);
    }

    #[test]
    fn test_prepend_into_empty_cache() {
        let mut todos = Vec::new();
        let cached = prepend_created(&mut todos, Todo::new(201, "only"));
        assert_eq!(cached.id, 201);
        assert_eq!(todos, vec![cached]);
    }

    #[test]
    fn test_prepend_next_to_max_id_does_not_overflow() {
        let mut todos = vec![Todo::new(u32::MAX, "last"), Todo::new(1, "first")];
        let cached = prepend_created(&mut todos, Todo::new(1, "new"));

        assert_eq!(cached.id, 2);
        let ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, u32::MAX, 1]);
    }

    #[test]
    fn test_replace_matching_todo_only() {
        let mut todos = sample();
        let updated = todos[1].with_title("renamed").toggled();

        assert!(replace_todo(&mut todos, updated.clone()));
        assert_eq!(todos[1], updated);
        assert_eq!(todos[0].title, "delectus aut autem");
        assert_eq!(todos[2].title, "fugiat veniam minus");
    }

    #[test]
    fn test_replace_unknown_is_noop() {
        let mut todos = sample();
        assert!(!replace_todo(&mut todos, Todo::new(99, "ghost")));
        assert_eq!(todos, sample());
    }

    #[test]
    fn test_remove_todo() {
        let mut todos = sample();
        assert!(remove_todo(&mut todos, 2));
        assert!(!remove_todo(&mut todos, 2));
        let ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_needs_fetch() {
        assert!(LoadState::Idle.needs_fetch());
        assert!(LoadState::Failed("boom".into()).needs_fetch());
        assert!(!LoadState::Loading.needs_fetch());
        assert!(!LoadState::Loaded.needs_fetch());
    }
}
