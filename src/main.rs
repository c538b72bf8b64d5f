//! Item List Frontend Entry Point

mod models;
mod error;
mod config;
mod storage;
mod rows;
mod filter;
mod chrome;
mod prompt;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = rolling_logger::init_logger(config.level_filter()) {
        web_sys::console::error_1(&format!("logger already initialised: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!(target: "config", "invalid app config, using defaults: {}", e);
    }
    rolling_logger::info(&format!("starting with storage key '{}'", config.storage_key));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
