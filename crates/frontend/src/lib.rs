pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use app::App;
use contracts::shared::config::Config;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = shared::config::load_config();
    let level = loaded
        .as_ref()
        .map(|config| config.log_level())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = loaded.unwrap_or_else(|err| {
        log::error!("Failed to load configuration, using defaults: {:#}", err);
        Config::default()
    });
    log::info!("catalog api: {}", config.api.products_url());

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
