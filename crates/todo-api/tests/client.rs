//! Client Integration Tests
//!
//! Runs TodoClient against an in-process axum server that behaves like the
//! placeholder service.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use todo_api::{ApiError, Todo, TodoClient};

type Db = Arc<Mutex<Vec<Todo>>>;

async fn list(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.lock().unwrap().clone())
}

// Like the placeholder service: echoes the body with a fixed id, stores nothing
async fn create(Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    body["id"] = json!(201);
    (StatusCode::CREATED, Json(body))
}

async fn show(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Todo>, StatusCode> {
    db.lock()
        .unwrap()
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn replace(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(todo): Json<Todo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.lock().unwrap();
    let slot = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    *slot = todo.clone();
    Ok(Json(todo))
}

async fn remove(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    db.lock().unwrap().retain(|t| t.id != id);
    StatusCode::OK
}

async fn serve(router: Router) -> TodoClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    TodoClient::new(format!("http://{}/", addr))
}

async fn setup() -> (TodoClient, Db) {
    let db: Db = Arc::new(Mutex::new(vec![
        Todo::new(1, "delectus aut autem"),
        Todo {
            id: 2,
            title: "quis ut nam facilis".to_string(),
            completed: true,
        },
    ]));
    let router = Router::new()
        .route("/todos", get(list).post(create))
        .route("/todos/{id}", get(show).put(replace).delete(remove))
        .with_state(db.clone());
    (serve(router).await, db)
}

#[tokio::test]
async fn test_list_todos() {
    let (client, _db) = setup().await;

    let todos = client.list().await.expect("List failed");
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].title, "delectus aut autem");
    assert!(todos[1].completed);
}

#[tokio::test]
async fn test_get_todo() {
    let (client, _db) = setup().await;

    let found = client.get(2).await.expect("Get failed");
    assert_eq!(found.map(|t| t.title), Some("quis ut nam facilis".to_string()));
}

#[tokio::test]
async fn test_get_missing_todo_is_none() {
    let (client, _db) = setup().await;

    let found = client.get(999).await.expect("Get failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_create_todo() {
    let (client, _db) = setup().await;

    let created = client.create("  write tests ").await.expect("Create failed");
    assert_eq!(created.id, 201);
    assert_eq!(created.title, "write tests");
    assert!(!created.completed);
}

#[tokio::test]
async fn test_create_blank_title_skips_request() {
    let (client, _db) = setup().await;

    let err = client.create("   ").await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyTitle));
}

#[tokio::test]
async fn test_update_todo() {
    let (client, db) = setup().await;

    let edited = Todo::new(1, "renamed").toggled();
    let updated = client.update(&edited).await.expect("Update failed");
    assert_eq!(updated, edited);
    assert_eq!(db.lock().unwrap()[0], edited);
}

#[tokio::test]
async fn test_update_unknown_todo_fails() {
    let (client, _db) = setup().await;

    let err = client.update(&Todo::new(201, "local only")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_delete_todo() {
    let (client, db) = setup().await;

    client.delete(1).await.expect("Delete failed");
    let remaining: Vec<u32> = db.lock().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![2]);
}

#[tokio::test]
async fn test_list_server_error() {
    let router = Router::new().route("/todos", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let client = serve(router).await;

    let err = client.list().await.unwrap_err();
    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/todos"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
