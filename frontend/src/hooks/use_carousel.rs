use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::use_window_size;

use super::{delay_ms, now};
use crate::reveal::{Carousel, CarouselConfig, CarouselState};

#[derive(Clone, PartialEq)]
pub struct CarouselHandle {
    pub state: CarouselState,
    pub select: Callback<usize>,
    pub hover: Callback<bool>,
}

struct Ticker {
    carousel: RefCell<Carousel>,
    timer: RefCell<Option<Timeout>>,
    publish: Callback<CarouselState>,
}

impl Ticker {
    fn new(carousel: Carousel, publish: Callback<CarouselState>) -> Self {
        Self {
            carousel: RefCell::new(carousel),
            timer: RefCell::new(None),
            publish,
        }
    }

    /// Cancels the pending tick. Nothing is published afterwards until the
    /// next `sync`.
    fn stop(&self) {
        self.timer.borrow_mut().take();
    }

    /// Publishes the current page and re-arms the timer for the next tick.
    fn sync(self: &Rc<Self>) {
        let (state, deadline) = {
            let carousel = self.carousel.borrow();
            (carousel.state(), carousel.next_deadline())
        };
        self.publish.emit(state);

        let timeout = deadline.map(|deadline| {
            let weak = Rc::downgrade(self);
            Timeout::new(delay_ms(deadline, now()), move || {
                if let Some(ticker) = weak.upgrade() {
                    ticker.carousel.borrow_mut().advance_to(now().max(deadline));
                    ticker.sync();
                }
            })
        });
        *self.timer.borrow_mut() = timeout;
    }
}

/// Auto-advancing pager over `item_count` items. Items per page follow the
/// window width; the interval is fixed when the component mounts.
#[hook]
pub fn use_carousel(item_count: usize, config: CarouselConfig) -> CarouselHandle {
    let (width, _) = use_window_size();
    let per_page = config.per_page_for_width(width);
    let state =
        use_state_eq(|| Carousel::new(item_count, per_page, config.interval_ms, 0.0).state());

    let ticker = {
        let setter = state.setter();
        let publish = Callback::from(move |next: CarouselState| setter.set(next));
        use_memo(
            move |_| {
                let carousel = Carousel::new(item_count, per_page, config.interval_ms, now());
                Ticker::new(carousel, publish)
            },
            (),
        )
    };

    {
        let ticker = Rc::clone(&ticker);
        use_effect_with_deps(
            move |(per_page, item_count)| {
                let at = now();
                {
                    let mut carousel = ticker.carousel.borrow_mut();
                    carousel.set_per_page(*per_page, at);
                    carousel.set_item_count(*item_count, at);
                }
                ticker.sync();
                || ()
            },
            (per_page, item_count),
        );
    }

    {
        let ticker = Rc::clone(&ticker);
        use_effect_with_deps(
            move |_| {
                move || ticker.stop()
            },
            (),
        );
    }

    let select = {
        let ticker = Rc::clone(&ticker);
        Callback::from(move |page: usize| {
            ticker.carousel.borrow_mut().select(page, now());
            ticker.sync();
        })
    };

    let hover = {
        let ticker = Rc::clone(&ticker);
        Callback::from(move |hovering: bool| {
            debug!("carousel {}", if hovering { "paused" } else { "resumed" });
            ticker.carousel.borrow_mut().hover(hovering, now());
            ticker.sync();
        })
    };

    CarouselHandle {
        state: *state,
        select,
        hover,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    fn ticker(pages: Rc<Cell<usize>>) -> Rc<Ticker> {
        let publish = Callback::from(move |state: CarouselState| pages.set(state.page));
        Rc::new(Ticker::new(Carousel::new(3, 1, 40.0, now()), publish))
    }

    #[wasm_bindgen_test]
    async fn running_ticker_advances_pages() {
        let page = Rc::new(Cell::new(usize::MAX));
        let ticker = ticker(page.clone());
        ticker.sync();
        assert_eq!(page.get(), 0);

        TimeoutFuture::new(60).await;
        assert_ne!(page.get(), 0);
        ticker.stop();
    }

    #[wasm_bindgen_test]
    async fn stopped_ticker_never_publishes_again() {
        let page = Rc::new(Cell::new(usize::MAX));
        let ticker = ticker(page.clone());
        ticker.sync();
        ticker.stop();
        assert!(ticker.timer.borrow().is_none());

        TimeoutFuture::new(120).await;
        assert_eq!(page.get(), 0);
    }
}
