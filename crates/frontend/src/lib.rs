pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use shared::config::config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config().log_level);
    console_error_panic_hook::set_once();
    log::info!("sales dashboard starting, api: {}", config().api_base);

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
