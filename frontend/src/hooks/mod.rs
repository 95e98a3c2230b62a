//! Browser bindings for the `reveal` engine.

pub mod listener;
pub mod use_carousel;
pub mod use_reveal;
pub mod viewport;

pub use listener::{listen, WindowListener};
pub use use_carousel::{use_carousel, CarouselHandle};
pub use use_reveal::{use_reveal_group, RevealHandle};
pub use viewport::{use_pointer, use_scroll_to_top, use_scroll_y, use_scrolled};

/// Monotonic milliseconds since page load, the time base every engine call
/// uses. Falls back to the wall clock only when there is no window.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub(crate) fn delay_ms(deadline: f64, now: f64) -> u32 {
    (deadline - now).max(0.0).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::delay_ms;

    #[test]
    fn delays_round_up_and_never_go_negative() {
        assert_eq!(delay_ms(1_000.0, 400.0), 600);
        assert_eq!(delay_ms(1_000.5, 1_000.0), 1);
        assert_eq!(delay_ms(10.0, 50.0), 0);
    }
}
