//! Browser tests for the motion binding.
//!
//! Run with: wasm-pack test --headless --chrome folio-app

#![cfg(target_arch = "wasm32")]

use folio_app::{FolioApp, SLOT_ATTRIBUTE};
use folio_core::{AnimationSpec, CounterConfig, RevealConfig, TypewriterConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document")
}

fn attr(spec: &AnimationSpec) -> String {
    spec.to_attribute()
        .expect("encode")
        .replace('&', "&amp;")
        .replace('"', "&quot;")
}

/// Install a fixture root with a fresh id and return its selector.
fn fixture(id: &str, body: &str) -> String {
    let document = document();
    let root = document.create_element("div").expect("div");
    root.set_id(id);
    root.set_inner_html(body);
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append");
    format!("#{id}")
}

fn element(selector: &str) -> HtmlElement {
    document()
        .query_selector(selector)
        .expect("query")
        .expect("present")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

#[wasm_bindgen_test]
fn test_mount_binds_every_descriptor() {
    let reveal = attr(&AnimationSpec::Reveal(RevealConfig::default()));
    let counter = attr(&AnimationSpec::Counter(CounterConfig::new(12, 500.0)));
    let selector = fixture(
        "mount-all",
        &format!(
            r#"<h2 data-motion="{reveal}">Title</h2><span class="n" data-motion="{counter}">12</span><p data-motion="not json">x</p>"#
        ),
    );
    let mut app = FolioApp::new();
    let bound = app.mount(&selector).expect("mount");
    assert_eq!(bound, 2);
    assert_eq!(app.bound_count(), 2);
    assert!(app.is_mounted());
    assert_eq!(
        element(&format!("{selector} .n")).get_attribute(SLOT_ATTRIBUTE).as_deref(),
        Some("1")
    );
    app.unmount();
    assert_eq!(app.bound_count(), 0);
}

#[wasm_bindgen_test]
fn test_mount_hides_end_state_until_finished() {
    let counter = attr(&AnimationSpec::Counter(CounterConfig::new(250, 2000.0)));
    let typed = attr(&AnimationSpec::Typewriter(
        TypewriterConfig::new("Hello").with_start_delay(60_000.0),
    ));
    let selector = fixture(
        "hide-then-finish",
        &format!(
            r#"<div style="margin-top:5000px"><span class="n" data-motion="{counter}">250</span></div><span class="typed" data-motion="{typed}">Hello</span><span class="caret">|</span>"#
        ),
    );
    let mut app = FolioApp::new();
    app.mount(&selector).expect("mount");
    let count = element(&format!("{selector} .n"));
    let typed = element(&format!("{selector} .typed"));
    assert_eq!(count.text_content().as_deref(), Some("0"));
    assert_eq!(typed.text_content().as_deref(), Some(""));

    app.finish_all();
    assert_eq!(count.text_content().as_deref(), Some("250"));
    assert_eq!(typed.text_content().as_deref(), Some("Hello"));
    app.unmount();
}

#[wasm_bindgen_test]
fn test_second_mount_is_rejected() {
    let selector = fixture("double-mount", "<p>static</p>");
    let mut app = FolioApp::new();
    assert_eq!(app.mount(&selector).expect("mount"), 0);
    assert!(app.mount(&selector).is_err());
    app.unmount();
    assert!(app.mount(&selector).is_ok());
    app.unmount();
}

#[wasm_bindgen_test]
fn test_missing_root_is_an_error() {
    let mut app = FolioApp::new();
    assert!(app.mount("#does-not-exist").is_err());
    assert!(!app.is_mounted());
}

#[wasm_bindgen_test]
fn test_unmount_shows_reveals() {
    let reveal = attr(&AnimationSpec::Reveal(RevealConfig::default()));
    let selector = fixture(
        "unmount-reveal",
        &format!(r#"<div style="margin-top:5000px"><p class="r" data-motion="{reveal}">x</p></div>"#),
    );
    let mut app = FolioApp::new();
    app.mount(&selector).expect("mount");
    let paragraph = element(&format!("{selector} .r"));
    assert_eq!(paragraph.style().get_property_value("opacity").as_deref(), Ok("0"));
    app.unmount();
    assert_eq!(paragraph.style().get_property_value("opacity").as_deref(), Ok("1"));
}

#[wasm_bindgen_test]
fn test_failed_mount_keeps_end_state() {
    let reveal = attr(&AnimationSpec::Reveal(RevealConfig::default()));
    let counter = attr(&AnimationSpec::Counter(CounterConfig::new(75, 2000.0)));
    let selector = fixture(
        "no-observer",
        &format!(
            r#"<p class="r" data-motion="{reveal}">x</p><span class="n" data-motion="{counter}">75</span>"#
        ),
    );
    let global = js_sys::global();
    let key = JsValue::from_str("IntersectionObserver");
    let observer_ctor = js_sys::Reflect::get(&global, &key).expect("constructor");
    js_sys::Reflect::delete_property(&global, &key).expect("remove");

    let mut app = FolioApp::new();
    let outcome = app.mount(&selector);
    js_sys::Reflect::set(&global, &key, &observer_ctor).expect("restore");

    assert!(outcome.is_err());
    assert!(!app.is_mounted());
    let paragraph = element(&format!("{selector} .r"));
    assert_eq!(paragraph.style().get_property_value("opacity").as_deref(), Ok(""));
    assert_eq!(
        element(&format!("{selector} .n")).text_content().as_deref(),
        Some("75")
    );
}
