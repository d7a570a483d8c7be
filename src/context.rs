//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;
use todo_api::TodoClient;

use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    /// Client for the remote collection
    pub client: TodoClient,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: TodoClient::new(config.api_base_url.clone()),
            config,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
