use serde::{Deserialize, Serialize};

pub type ElementId = u32;

/// Presentation state of a watched element. Ordered by progress; `Visible`
/// is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Visibility {
    #[default]
    Unseen,
    Entering,
    Visible,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        !matches!(self, Visibility::Unseen)
    }
}

/// Whether the browser gave us a working `IntersectionObserver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable,
}

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            once: true,
        }
    }
}

impl ObserveOptions {
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            once,
        }
    }
}

// NaN and non-positive thresholds would never fire, so they fall back to the default.
fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() || threshold <= 0.0 {
        DEFAULT_THRESHOLD
    } else {
        threshold.min(1.0)
    }
}

/// Share of an element's height inside a viewport of `viewport_height`,
/// given its bounding-rect `top` and `height`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return if top >= 0.0 && top < viewport_height { 1.0 } else { 0.0 };
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchedElement {
    pub id: ElementId,
    pub state: Visibility,
    pub registered_at: f64,
}

/// Emitted when a watched element crosses the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entered {
    pub id: ElementId,
    pub at: f64,
}

#[derive(Clone, Copy, Debug)]
struct Watch {
    id: ElementId,
    fired: bool,
    inside: bool,
}

/// Tracks threshold crossings for the elements a section registers.
///
/// The observer only decides *when* an element has entered; what happens
/// next (staggering, class toggles) belongs to whoever consumes [`Entered`].
#[derive(Debug)]
pub struct VisibilityObserver {
    options: ObserveOptions,
    capability: Capability,
    watches: Vec<Watch>,
    next_id: ElementId,
}

impl VisibilityObserver {
    pub fn new(options: ObserveOptions, capability: Capability) -> Self {
        Self {
            options: ObserveOptions::new(options.threshold, options.once),
            capability,
            watches: Vec::new(),
            next_id: 0,
        }
    }

    pub fn options(&self) -> ObserveOptions {
        self.options
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn allocate_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Starts watching an element whose current intersection ratio is
    /// `initial_ratio`. Elements already past the threshold, and every
    /// element when the capability is missing, fire right away.
    pub fn register(&mut self, initial_ratio: f64, now: f64) -> (ElementId, Option<Entered>) {
        let id = self.allocate_id();
        self.watches.push(Watch {
            id,
            fired: false,
            inside: false,
        });
        let ratio = match self.capability {
            Capability::Available => initial_ratio,
            Capability::Unavailable => 1.0,
        };
        let entered = self.observe(id, ratio, now);
        (id, entered)
    }

    /// Feeds a new intersection ratio for `id`.
    pub fn observe(&mut self, id: ElementId, ratio: f64, now: f64) -> Option<Entered> {
        let threshold = self.options.threshold;
        let once = self.options.once;
        let watch = self.watches.iter_mut().find(|w| w.id == id)?;

        let inside = ratio >= threshold && ratio > 0.0;
        let was_inside = watch.inside;
        watch.inside = inside;

        if !inside || was_inside {
            return None;
        }
        if once && watch.fired {
            return None;
        }
        watch.fired = true;
        Some(Entered { id, at: now })
    }

    pub fn unregister(&mut self, id: ElementId) {
        self.watches.retain(|w| w.id != id);
    }

    pub fn is_watching(&self, id: ElementId) -> bool {
        self.watches.iter().any(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer(once: bool) -> VisibilityObserver {
        VisibilityObserver::new(ObserveOptions::new(0.1, once), Capability::Available)
    }

    #[test]
    fn element_visible_at_registration_fires_immediately() {
        let mut obs = observer(true);
        let (id, entered) = obs.register(0.5, 12.0);
        assert_eq!(entered, Some(Entered { id, at: 12.0 }));
    }

    #[test]
    fn element_below_threshold_waits_for_crossing() {
        let mut obs = observer(true);
        let (id, entered) = obs.register(0.05, 0.0);
        assert_eq!(entered, None);
        assert_eq!(obs.observe(id, 0.08, 10.0), None);
        assert_eq!(obs.observe(id, 0.1, 20.0), Some(Entered { id, at: 20.0 }));
    }

    #[test]
    fn trigger_once_never_refires() {
        let mut obs = observer(true);
        let (id, _) = obs.register(0.0, 0.0);
        assert!(obs.observe(id, 0.4, 1.0).is_some());
        assert!(obs.observe(id, 0.0, 2.0).is_none());
        assert!(obs.observe(id, 0.4, 3.0).is_none());
    }

    #[test]
    fn repeating_observer_refires_on_reentry() {
        let mut obs = observer(false);
        let (id, _) = obs.register(0.0, 0.0);
        assert!(obs.observe(id, 0.4, 1.0).is_some());
        // still inside, no duplicate
        assert!(obs.observe(id, 0.6, 1.5).is_none());
        assert!(obs.observe(id, 0.0, 2.0).is_none());
        assert_eq!(obs.observe(id, 0.3, 3.0), Some(Entered { id, at: 3.0 }));
    }

    #[test]
    fn missing_capability_fails_open() {
        let mut obs = VisibilityObserver::new(ObserveOptions::default(), Capability::Unavailable);
        let (_, entered) = obs.register(0.0, 5.0);
        assert!(entered.is_some());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ObserveOptions::new(0.0, true).threshold, DEFAULT_THRESHOLD);
        assert_eq!(ObserveOptions::new(-1.0, true).threshold, DEFAULT_THRESHOLD);
        assert_eq!(ObserveOptions::new(f64::NAN, true).threshold, DEFAULT_THRESHOLD);
        assert_eq!(ObserveOptions::new(3.0, true).threshold, 1.0);
        assert_eq!(ObserveOptions::new(0.3, false).threshold, 0.3);
    }

    #[test]
    fn unregistered_elements_are_ignored() {
        let mut obs = observer(true);
        let (id, _) = obs.register(0.0, 0.0);
        obs.unregister(id);
        assert!(!obs.is_watching(id));
        assert!(obs.observe(id, 1.0, 1.0).is_none());
        assert!(obs.is_empty());
    }

    #[test]
    fn visible_fraction_of_a_rect() {
        assert_eq!(visible_fraction(0.0, 100.0, 800.0), 1.0);
        assert_eq!(visible_fraction(750.0, 100.0, 800.0), 0.5);
        assert_eq!(visible_fraction(-50.0, 100.0, 800.0), 0.5);
        assert_eq!(visible_fraction(900.0, 100.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-300.0, 100.0, 800.0), 0.0);
        // a collapsed element counts as fully visible while on screen
        assert_eq!(visible_fraction(10.0, 0.0, 800.0), 1.0);
        assert_eq!(visible_fraction(10.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn ids_are_unique() {
        let mut obs = observer(true);
        let (a, _) = obs.register(0.0, 0.0);
        let (b, _) = obs.register(0.0, 0.0);
        assert_ne!(a, b);
        assert_eq!(obs.len(), 2);
    }
}
