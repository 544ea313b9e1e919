mod components;
mod config;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;
mod viewmodels;

#[cfg(test)]
mod test_support;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("☕ Camper Café starting...");

    yew::Renderer::<App>::new().render();
}
