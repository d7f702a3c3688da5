//! Mindora Todo Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod dates;
mod draft;
mod logging;
mod models;
mod priority;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    mount_to_body(App);
}
