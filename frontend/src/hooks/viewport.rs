use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::listen;
use crate::reveal::PointerGlow;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Jumps the window back to the top once, when the calling page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// Current vertical scroll offset, updated on every `scroll` event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state_eq(scroll_y);
    {
        let setter = offset.setter();
        use_effect_with_deps(
            move |_| {
                let listener = listen("scroll", move |_| setter.set(scroll_y()));
                move || drop(listener)
            },
            (),
        );
    }
    *offset
}

/// True once the page has scrolled past `threshold` pixels. Only re-renders
/// when the answer flips.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| scroll_y() > threshold);
    {
        let setter = scrolled.setter();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                setter.set(scroll_y() > threshold);
                let listener = listen("scroll", move |_| setter.set(scroll_y() > threshold));
                move || drop(listener)
            },
            threshold,
        );
    }
    *scrolled
}

#[hook]
pub fn use_pointer() -> PointerGlow {
    let glow = use_state_eq(PointerGlow::default);
    {
        let setter = glow.setter();
        use_effect_with_deps(
            move |_| {
                let listener = listen("mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        let mut next = PointerGlow::default();
                        next.move_to(event.client_x() as f64, event.client_y() as f64);
                        setter.set(next);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    *glow
}
