//! REST Client
//!
//! CRUD calls against `{base}/todos`.

use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{NewTodo, Todo};

/// Public placeholder service the app talks to by default
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct TodoClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn item_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    /// Fetch the whole collection
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let url = self.collection_url();
        debug!(%url, "GET todos");
        let resp = self.http.get(&url).send().await?;
        let todos: Vec<Todo> = check_status(resp, &url)?.json().await?;
        debug!(count = todos.len(), "fetched todos");
        Ok(todos)
    }

    /// Fetch one record; `None` when the server has no such id
    pub async fn get(&self, id: u32) -> Result<Option<Todo>> {
        let url = self.item_url(id);
        debug!(%url, "GET todo");
        let resp = self.http.get(&url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let todo = check_status(resp, &url)?.json().await?;
        Ok(Some(todo))
    }

    pub async fn create(&self, title: &str) -> Result<Todo> {
        let body = NewTodo::new(title)?;
        let url = self.collection_url();
        debug!(%url, title = %body.title, "POST todo");
        let resp = self.http.post(&url).json(&body).send().await?;
        let created = check_status(resp, &url)?.json().await?;
        Ok(created)
    }

    /// Replace a record with `todo` and return what the server stored
    pub async fn update(&self, todo: &Todo) -> Result<Todo> {
        let url = self.item_url(todo.id);
        debug!(%url, "PUT todo");
        let resp = self.http.put(&url).json(todo).send().await?;
        let updated = check_status(resp, &url)?.json().await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: u32) -> Result<()> {
        let url = self.item_url(id);
        debug!(%url, "DELETE todo");
        let resp = self.http.delete(&url).send().await?;
        check_status(resp, &url)?;
        Ok(())
    }
}

fn check_status(resp: Response, url: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Parse an id taken from a route parameter
pub fn parse_id(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = TodoClient::new("http://localhost:3000//");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.collection_url(), "http://localhost:3000/todos");
        assert_eq!(client.item_url(42), "http://localhost:3000/todos/42");
    }

    #[test]
    fn test_default_points_at_placeholder_service() {
        let client = TodoClient::default();
        assert_eq!(client.collection_url(), "https://jsonplaceholder.typicode.com/todos");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_id("-1"), Err(ApiError::InvalidId(_))));
    }
}
