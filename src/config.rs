//! App Configuration
//!
//! Values baked in at build time from `TODO_*` environment variables.

use std::str::FromStr;

use todo_api::DEFAULT_BASE_URL;
use tracing::Level;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the remote collection, without `/todos`
    pub api_base_url: String,
    /// Rows per page in the list view
    pub page_size: usize,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_PAGE_SIZE"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    /// Unset, empty or unparsable values keep the default.
    pub fn from_values(base_url: Option<&str>, page_size: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base_url);

        let page_size = page_size
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.page_size);

        let log_level = log_level
            .and_then(|s| Level::from_str(s.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            page_size,
            log_level,
        }
    }
}
