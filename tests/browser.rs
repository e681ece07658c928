//! Browser tests for the History-backed navigation.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use casino_web::core::{BrowserNavigation, Navigation};
use casino_web::models::{Location, QueryString};
use casino_web::utils::dom;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn history_len() -> u32 {
    dom::window()
        .and_then(|w| w.history().ok())
        .and_then(|h| h.length().ok())
        .unwrap_or(0)
}

fn navigation() -> (BrowserNavigation, RwSignal<Location>) {
    let location = RwSignal::new(Location::from_parts(
        &dom::current_path(),
        &dom::current_search(),
    ));
    (BrowserNavigation::new(location), location)
}

#[wasm_bindgen_test]
fn test_replace_query_keeps_history_length() {
    let (nav, location) = navigation();
    let before = history_len();

    nav.replace_query(&QueryString::parse("tab=deposit"));

    assert_eq!(history_len(), before);
    assert_eq!(dom::current_search(), "?tab=deposit");
    assert_eq!(
        location.with_untracked(|l| l.query.get("tab").map(str::to_string)),
        Some("deposit".to_string())
    );
}

#[wasm_bindgen_test]
fn test_push_query_adds_history_entry() {
    let (nav, _) = navigation();
    let before = history_len();

    nav.push_query(&QueryString::parse("category=slots&provider=pragmatic"));

    assert_eq!(history_len(), before + 1);
    assert_eq!(
        QueryString::parse(&dom::current_search()).get("provider"),
        Some("pragmatic")
    );
}

#[wasm_bindgen_test]
fn test_empty_query_clears_search() {
    let (nav, _) = navigation();
    nav.replace_query(&QueryString::parse("tab=swap"));
    nav.replace_query(&QueryString::new());
    assert_eq!(dom::current_search(), "");
}
