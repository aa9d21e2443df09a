//! Browser tests for the web-sys bindings.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use portfolio_core::browser::{DocumentRoot, DomScroller, LocalStorage};
use portfolio_core::{KeyValueStore, PortfolioApp, ScrollSurface, ThemeSurface};

wasm_bindgen_test_configure!(run_in_browser);

fn html_has_class(class: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains(class))
        .unwrap_or(false)
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut storage = LocalStorage::new();
    assert!(storage.is_available());

    storage.set("portfolio-test", "dark").unwrap();
    assert_eq!(storage.get("portfolio-test").unwrap().as_deref(), Some("dark"));
    assert_eq!(storage.get("portfolio-missing").unwrap(), None);
}

#[wasm_bindgen_test]
fn document_root_toggles_class() {
    let mut root = DocumentRoot::new("test-dark");

    root.set_dark(true).unwrap();
    assert!(html_has_class("test-dark"));

    root.set_dark(false).unwrap();
    assert!(!html_has_class("test-dark"));
}

#[wasm_bindgen_test]
fn scroller_reports_missing_anchor() {
    let scroller = DomScroller::new();
    assert!(!scroller.scroll_into_view("no-such-section"));
}

#[wasm_bindgen_test]
fn app_toggle_persists_theme() {
    let config = js_sys::JSON::parse(r#"{"storage_key":"portfolio-app-test"}"#).unwrap();
    let mut app = PortfolioApp::new(config).unwrap();
    let before = app.theme();

    let after = app.toggle_theme();
    assert_ne!(before, after);

    let stored = LocalStorage::new().get("portfolio-app-test").unwrap();
    assert_eq!(stored.as_deref(), Some(after.as_str()));
    assert_eq!(html_has_class("dark"), after == "dark");
}

#[wasm_bindgen_test]
fn app_carousel_wraps() {
    let mut app = PortfolioApp::new(JsValue::UNDEFINED).unwrap();
    app.previous_project().unwrap();

    let snapshot: portfolio_core::PageSnapshot =
        serde_wasm_bindgen::from_value(app.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.project_index, snapshot.project_count - 1);
}

#[wasm_bindgen_test]
fn app_mount_and_unmount() {
    let mut app = PortfolioApp::new(JsValue::UNDEFINED).unwrap();
    app.mount().unwrap();
    assert!(app.is_mounted());
    app.unmount();
    assert!(!app.is_mounted());
}
