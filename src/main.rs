//! Todo App Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod listing;
mod pages;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    tracing::info!(
        api = %config.api_base_url,
        page_size = config.page_size,
        "Starting todo app"
    );

    mount_to_body(move || view! { <App config=config /> });
}
