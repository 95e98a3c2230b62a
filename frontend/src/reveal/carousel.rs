use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: f64,
    pub breakpoint_px: f64,
    pub narrow_per_page: usize,
    pub wide_per_page: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5_000.0,
            breakpoint_px: 768.0,
            narrow_per_page: 1,
            wide_per_page: 2,
        }
    }
}

impl CarouselConfig {
    /// A carousel that always shows a single item, e.g. the service tabs.
    pub fn single() -> Self {
        Self {
            wide_per_page: 1,
            ..Self::default()
        }
    }

    pub fn per_page_for_width(&self, width: f64) -> usize {
        if width < self.breakpoint_px {
            self.narrow_per_page.max(1)
        } else {
            self.wide_per_page.max(1)
        }
    }
}

/// Snapshot handed to the render layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub page: usize,
    pub total_pages: usize,
    pub per_page: usize,
    pub paused: bool,
}

impl CarouselState {
    /// Item index range shown on the current page.
    pub fn visible_range(&self, item_count: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.per_page).min(item_count);
        let end = (start + self.per_page).min(item_count);
        start..end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
}

pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    ((item_count + per_page - 1) / per_page).max(1)
}

/// Auto-advancing page index.
///
/// Hovering suspends the timer; leaving starts a fresh full interval rather
/// than resuming the remainder. Manual selection also restarts the interval.
#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    per_page: usize,
    page: usize,
    interval_ms: f64,
    mode: Mode,
    deadline: Option<f64>,
}

impl Carousel {
    pub fn new(item_count: usize, per_page: usize, interval_ms: f64, now: f64) -> Self {
        let mut carousel = Self {
            item_count,
            per_page: per_page.max(1),
            page: 0,
            interval_ms: interval_ms.max(1.0),
            mode: Mode::Running,
            deadline: None,
        };
        carousel.rearm(now);
        carousel
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            page: self.page,
            total_pages: self.total_pages(),
            per_page: self.per_page,
            paused: self.mode == Mode::Paused,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.per_page)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Applies every tick due by `now`. Returns the number of pages moved.
    pub fn advance_to(&mut self, now: f64) -> usize {
        let total = self.total_pages();
        let mut steps = 0;
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            self.page = (self.page + 1) % total;
            self.deadline = Some(deadline + self.interval_ms);
            steps += 1;
        }
        steps
    }

    pub fn hover(&mut self, hovering: bool, now: f64) {
        if hovering {
            self.mode = Mode::Paused;
            self.deadline = None;
        } else {
            self.mode = Mode::Running;
            self.rearm(now);
        }
    }

    pub fn select(&mut self, page: usize, now: f64) {
        self.page = page.min(self.total_pages() - 1);
        self.mode = Mode::Running;
        self.rearm(now);
    }

    pub fn set_per_page(&mut self, per_page: usize, now: f64) {
        let per_page = per_page.max(1);
        if per_page == self.per_page {
            return;
        }
        self.per_page = per_page;
        self.reclamp(now);
    }

    pub fn set_item_count(&mut self, item_count: usize, now: f64) {
        if item_count == self.item_count {
            return;
        }
        self.item_count = item_count;
        self.reclamp(now);
    }

    fn reclamp(&mut self, now: f64) {
        let total = self.total_pages();
        if self.page >= total {
            self.page = total - 1;
        }
        if total <= 1 {
            self.page = 0;
            self.deadline = None;
        } else if self.mode == Mode::Running && self.deadline.is_none() {
            self.rearm(now);
        }
    }

    fn rearm(&mut self, now: f64) {
        self.deadline = if self.mode == Mode::Running && self.total_pages() > 1 {
            Some(now + self.interval_ms)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 5_000.0;

    #[test]
    fn total_pages_is_ceiling_and_never_zero() {
        assert_eq!(total_pages(3, 1), 3);
        assert_eq!(total_pages(3, 2), 2);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(0, 2), 1);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn auto_advance_wraps() {
        let mut c = Carousel::new(3, 1, T, 0.0);
        assert_eq!(c.advance_to(2.0 * T), 2);
        assert_eq!(c.page(), 2);
        assert_eq!(c.advance_to(3.0 * T), 1);
        assert_eq!(c.page(), 0);
    }

    #[test]
    fn nothing_happens_before_the_interval() {
        let mut c = Carousel::new(3, 1, T, 0.0);
        assert_eq!(c.advance_to(T - 1.0), 0);
        assert_eq!(c.page(), 0);
    }

    #[test]
    fn hover_suspends_and_leave_restarts_fresh() {
        let mut c = Carousel::new(3, 1, T, 0.0);
        c.advance_to(4_000.0);
        c.hover(true, 4_000.0);
        assert!(c.state().paused);
        assert_eq!(c.advance_to(60_000.0), 0);
        assert_eq!(c.page(), 0);

        c.hover(false, 60_000.0);
        assert!(!c.state().paused);
        assert_eq!(c.advance_to(60_000.0 + T - 1.0), 0);
        assert_eq!(c.advance_to(60_000.0 + T), 1);
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn manual_selection_restarts_the_timer() {
        let mut c = Carousel::new(3, 1, T, 0.0);
        c.select(2, 4_000.0);
        assert_eq!(c.page(), 2);
        assert_eq!(c.next_deadline(), Some(4_000.0 + T));
        assert_eq!(c.advance_to(T), 0);
        c.advance_to(4_000.0 + T);
        assert_eq!(c.page(), 0);
    }

    #[test]
    fn manual_selection_while_paused_resumes() {
        let mut c = Carousel::new(3, 1, T, 0.0);
        c.hover(true, 10.0);
        c.select(1, 20.0);
        assert_eq!(c.mode(), Mode::Running);
        assert_eq!(c.next_deadline(), Some(20.0 + T));
    }

    #[test]
    fn selection_out_of_range_is_clamped() {
        let mut c = Carousel::new(3, 1, T, 0.0);
        c.select(9, 0.0);
        assert_eq!(c.page(), 2);
    }

    #[test]
    fn resize_clamps_the_index() {
        let mut c = Carousel::new(5, 1, T, 0.0);
        c.select(4, 0.0);
        c.set_per_page(2, 10.0);
        let state = c.state();
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.page, 2);
        assert!(state.page < state.total_pages);
    }

    #[test]
    fn single_page_stops_advancing() {
        let mut c = Carousel::new(2, 1, T, 0.0);
        c.select(1, 0.0);
        c.set_per_page(2, 100.0);
        assert_eq!(c.page(), 0);
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.advance_to(100.0 * T), 0);

        c.set_per_page(1, 200.0);
        assert_eq!(c.next_deadline(), Some(200.0 + T));
    }

    #[test]
    fn zero_per_page_is_treated_as_one() {
        let mut c = Carousel::new(3, 0, T, 0.0);
        assert_eq!(c.state().per_page, 1);
        c.set_per_page(0, 0.0);
        assert_eq!(c.total_pages(), 3);
    }

    #[test]
    fn shrinking_the_data_set_clamps() {
        let mut c = Carousel::new(6, 2, T, 0.0);
        c.select(2, 0.0);
        c.set_item_count(3, 1.0);
        assert_eq!(c.state().total_pages, 2);
        assert_eq!(c.page(), 1);
        c.set_item_count(0, 2.0);
        assert_eq!(c.page(), 0);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn index_stays_in_range_under_any_resize() {
        let mut c = Carousel::new(7, 1, T, 0.0);
        for (i, per_page) in [1usize, 3, 2, 7, 0, 4, 1].iter().enumerate() {
            c.select(i * 3, i as f64);
            c.set_per_page(*per_page, i as f64);
            let s = c.state();
            assert!(s.page < s.total_pages, "{:?}", s);
        }
    }

    #[test]
    fn per_page_follows_the_breakpoint() {
        let config = CarouselConfig::default();
        assert_eq!(config.per_page_for_width(375.0), 1);
        assert_eq!(config.per_page_for_width(768.0), 2);
        assert_eq!(CarouselConfig::single().per_page_for_width(1440.0), 1);
    }

    #[test]
    fn visible_range_covers_the_page() {
        let c = Carousel::new(3, 2, T, 0.0);
        assert_eq!(c.state().visible_range(3), 0..2);
        let mut c = c;
        c.select(1, 0.0);
        assert_eq!(c.state().visible_range(3), 2..3);
    }
}
