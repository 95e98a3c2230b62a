//! Browser-side checks for the bindings that cannot run natively.
#![cfg(target_arch = "wasm32")]
extern crate wasm_bindgen_test;
use std::cell::Cell;
use std::rc::Rc;

use futurecore_site::config::{SiteConfig, CONFIG_STORAGE_KEY};
use futurecore_site::hooks::{now, use_scroll_to_top, WindowListener};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::Event;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fire(name: &str) {
    let window = web_sys::window().unwrap();
    let event = Event::new(name).unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn listener_receives_events_until_dropped() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = hits.clone();
        WindowListener::new("futurecore-test", move |_| hits.set(hits.get() + 1)).unwrap()
    };
    assert_eq!(listener.event(), "futurecore-test");

    fire("futurecore-test");
    fire("futurecore-test");
    assert_eq!(hits.get(), 2);

    drop(listener);
    fire("futurecore-test");
    assert_eq!(hits.get(), 2);
}

#[wasm_bindgen_test]
fn clock_counts_from_page_load_and_never_goes_back() {
    let a = now();
    let b = now();
    assert!(a >= 0.0);
    assert!(a < js_sys::Date::now());
    assert!(b >= a);
}

#[wasm_bindgen_test]
fn stored_override_is_picked_up_in_debug_builds() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage
        .set_item(CONFIG_STORAGE_KEY, r#"{"carousel": {"interval_ms": 1234}}"#)
        .unwrap();
    let loaded = SiteConfig::load();
    storage.remove_item(CONFIG_STORAGE_KEY).unwrap();

    if cfg!(debug_assertions) {
        assert_eq!(loaded.carousel.interval_ms, 1234.0);
    } else {
        assert_eq!(loaded, SiteConfig::default());
    }
}

#[wasm_bindgen_test]
fn broken_override_falls_back_to_defaults() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(CONFIG_STORAGE_KEY, "{not json").unwrap();
    let loaded = SiteConfig::load();
    storage.remove_item(CONFIG_STORAGE_KEY).unwrap();
    assert_eq!(loaded, SiteConfig::default());
}

#[function_component]
fn TopOfPage() -> Html {
    use_scroll_to_top();
    html! { <p>{"top"}</p> }
}

#[wasm_bindgen_test]
async fn mounting_a_page_scrolls_back_to_the_top() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();

    let spacer = document.create_element("div").unwrap();
    spacer.set_attribute("style", "height: 5000px").unwrap();
    body.append_child(&spacer).unwrap();
    window.scroll_to_with_x_and_y(0.0, 800.0);
    assert!(window.scroll_y().unwrap() > 0.0);

    let root = document.create_element("div").unwrap();
    body.append_child(&root).unwrap();
    let app = yew::Renderer::<TopOfPage>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;
    assert_eq!(window.scroll_y().unwrap(), 0.0);

    app.destroy();
    body.remove_child(&root).unwrap();
    body.remove_child(&spacer).unwrap();
}
