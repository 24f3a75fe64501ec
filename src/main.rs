mod api;
mod app;
mod check;
mod components;
mod config;
mod error;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    leptos::mount::mount_to_body(App);
}

/// Route `tracing` events to the browser console.
fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
}
