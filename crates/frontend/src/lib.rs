pub mod app;
pub mod config;
pub mod dashboards;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Configuration is resolved exactly once, before anything renders.
    if let Err(err) = config::init() {
        log::error!("Refusing to start: {}", err);
        return;
    }

    leptos::mount::mount_to_body(app::App);
}
