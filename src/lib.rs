//! Casino front-end client.
//!
//! Page routes for browsing games and providers, bet history, the user
//! profile, and a wallet transaction modal. Listing filters and the modal
//! tab are mirrored into the URL query string.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the application on the `#app` element.
pub fn mount() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, app::App).forget();
}
