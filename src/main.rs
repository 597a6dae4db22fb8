#![allow(warnings)]
//! Todo List Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod filter;
mod todo_list;
mod store;
mod components;
mod app;

use app::App;
use config::TodoConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = TodoConfig::bundled();
    let level = loaded.as_ref().map_or(log::LevelFilter::Info, |c| c.log_level);
    if let Err(err) = logging::init(level) {
        web_sys::console::error_1(&format!("[main] logger already set: {}", err).into());
    }
    let config = loaded.unwrap_or_else(|err| {
        log::error!("falling back to default config: {}", err);
        TodoConfig::default()
    });

    log::info!("starting with {} seed tasks", config.seed.len());
    mount_to_body(move || view! { <App config=config /> });
}
