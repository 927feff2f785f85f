#![allow(non_snake_case)]

pub mod bindings;
pub mod components;
pub mod config;
pub mod services;
pub mod utils;

mod app;

pub use app::{App, QaWorkspace};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting Document Q&A frontend");

    // Remove loading spinner
    if let Some(loader) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app-loading"))
    {
        loader.remove();
    }

    leptos::mount::mount_to_body(App);
}
