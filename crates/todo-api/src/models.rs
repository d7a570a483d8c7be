//! Todo Models
//!
//! Records as the remote collection serves them.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// A to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Copy of this record with a new title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Copy of this record with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    /// Trims the title; blank titles are rejected.
    pub fn new(title: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            completed: false,
        })
    }
}
