pub mod app;
pub mod costing;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Nothing to attach to without a document body; abort instead of panicking.
    let has_body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .is_some();
    if !has_body {
        log::error!("document body not available; costing form not mounted");
        return;
    }

    leptos::mount::mount_to_body(app::App);
}
