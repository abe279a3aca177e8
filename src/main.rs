//! Todo App Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    browser::init_logging(log::LevelFilter::Info);
    mount_to_body(App);
}
