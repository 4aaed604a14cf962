//! Dashboard Frontend Entry Point

mod animation;
mod app;
mod components;
mod context;
mod runtime;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting dashboard frontend");
    mount_to_body(App);
}
