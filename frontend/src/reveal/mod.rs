//! Reveal-on-visibility engine.
//!
//! Pure bookkeeping for the site's motion: which elements have entered the
//! viewport, when each member of a staggered group should start and finish
//! its transition, which carousel page is showing, and how far a parallax
//! layer moves. Time is always passed in as milliseconds so none of this
//! touches the browser; the `hooks` module wires it to real events.

pub mod carousel;
pub mod parallax;
pub mod pointer;
pub mod stagger;
pub mod visibility;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use carousel::{Carousel, CarouselConfig, CarouselState};
pub use parallax::{ParallaxBinding, ParallaxConfig, Particle};
pub use pointer::PointerGlow;
pub use stagger::{Easing, RevealGroup, StaggerConfig};
pub use visibility::{Capability, ElementId, ObserveOptions, Visibility, VisibilityObserver};

#[derive(Debug, Error, PartialEq)]
pub enum RevealError {
    #[error("no window available")]
    NoWindow,
    #[error("IntersectionObserver is not supported by this browser")]
    ObserverUnavailable,
    #[error("IntersectionObserver rejected the options: {0}")]
    ObserverRejected(String),
    #[error("could not listen for `{0}` events")]
    Listener(&'static str),
}

/// How a revealed element moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RevealStyle {
    #[default]
    FadeUp,
    FadeIn,
    SlideLeft,
    SlideRight,
    ScaleUp,
}

impl RevealStyle {
    pub fn class(self) -> &'static str {
        match self {
            RevealStyle::FadeUp => "reveal--fade-up",
            RevealStyle::FadeIn => "reveal--fade-in",
            RevealStyle::SlideLeft => "reveal--slide-left",
            RevealStyle::SlideRight => "reveal--slide-right",
            RevealStyle::ScaleUp => "reveal--scale-up",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RevealConfig {
    pub observe: ObserveOptions,
    pub stagger: StaggerConfig,
    pub style: RevealStyle,
}

impl RevealConfig {
    pub fn with_stagger(mut self, stagger: StaggerConfig) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_style(mut self, style: RevealStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.observe = ObserveOptions::new(threshold, self.observe.once);
        self
    }
}

/// One section's observer plus the groups hanging off its watched
/// containers.
#[derive(Debug)]
pub struct RevealEngine {
    observer: VisibilityObserver,
    groups: Vec<(ElementId, RevealGroup)>,
}

impl RevealEngine {
    pub fn new(options: ObserveOptions, capability: Capability) -> Self {
        Self {
            observer: VisibilityObserver::new(options, capability),
            groups: Vec::new(),
        }
    }

    pub fn capability(&self) -> Capability {
        self.observer.capability()
    }

    /// Observe options after clamping; the browser observer must use these.
    pub fn options(&self) -> ObserveOptions {
        self.observer.options()
    }

    /// Registers a container with `members` staggered children. Returns the
    /// container id the bridge reports intersections against.
    pub fn watch_group(
        &mut self,
        config: StaggerConfig,
        members: usize,
        initial_ratio: f64,
        now: f64,
    ) -> ElementId {
        let (container, entered) = self.observer.register(initial_ratio, now);
        let ids: Vec<ElementId> = (0..members).map(|_| self.observer.allocate_id()).collect();
        let mut group = RevealGroup::new(config, ids, now);
        if let Some(entered) = entered {
            group.trigger(entered.at);
            group.advance(now);
        }
        self.groups.push((container, group));
        container
    }

    /// Returns true when this call triggered the container's group.
    pub fn on_intersection(&mut self, container: ElementId, ratio: f64, now: f64) -> bool {
        let Some(entered) = self.observer.observe(container, ratio, now) else {
            return false;
        };
        match self.group_mut(container) {
            Some(group) => {
                let triggered = group.trigger(entered.at);
                group.advance(now);
                triggered
            }
            None => false,
        }
    }

    pub fn advance(&mut self, now: f64) -> bool {
        let mut changed = false;
        for (_, group) in &mut self.groups {
            changed |= group.advance(now);
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.groups
            .iter()
            .filter_map(|(_, group)| group.next_deadline())
            .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.min(t))))
    }

    pub fn reveal_all(&mut self, now: f64) {
        for (_, group) in &mut self.groups {
            group.reveal_all(now);
        }
    }

    pub fn states(&self, container: ElementId) -> Vec<Visibility> {
        self.group(container)
            .map(RevealGroup::states)
            .unwrap_or_default()
    }

    pub fn is_triggered(&self, container: ElementId) -> bool {
        self.group(container)
            .map(|g| g.triggered_at().is_some())
            .unwrap_or(false)
    }

    pub fn unwatch(&mut self, container: ElementId) {
        self.observer.unregister(container);
        self.groups.retain(|(id, _)| *id != container);
    }

    fn group(&self, container: ElementId) -> Option<&RevealGroup> {
        self.groups
            .iter()
            .find(|(id, _)| *id == container)
            .map(|(_, g)| g)
    }

    fn group_mut(&mut self, container: ElementId) -> Option<&mut RevealGroup> {
        self.groups
            .iter_mut()
            .find(|(id, _)| *id == container)
            .map(|(_, g)| g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RevealEngine {
        RevealEngine::new(ObserveOptions::default(), Capability::Available)
    }

    #[test]
    fn visible_container_reveals_first_member_on_registration() {
        let mut engine = engine();
        let id = engine.watch_group(StaggerConfig::default(), 3, 0.4, 100.0);
        assert_eq!(
            engine.states(id),
            vec![Visibility::Entering, Visibility::Unseen, Visibility::Unseen]
        );
        assert_eq!(engine.next_deadline(), Some(200.0));
    }

    #[test]
    fn hidden_container_waits_for_intersection() {
        let mut engine = engine();
        let id = engine.watch_group(StaggerConfig::default(), 2, 0.0, 0.0);
        assert!(!engine.is_triggered(id));
        assert_eq!(engine.next_deadline(), None);

        assert!(engine.on_intersection(id, 0.2, 1_000.0));
        assert_eq!(engine.states(id)[0], Visibility::Entering);
        engine.advance(1_800.0);
        assert_eq!(engine.states(id), vec![Visibility::Visible; 2]);
    }

    #[test]
    fn leaving_the_viewport_never_regresses() {
        let mut engine = RevealEngine::new(ObserveOptions::new(0.1, false), Capability::Available);
        let id = engine.watch_group(StaggerConfig::default(), 1, 0.0, 0.0);
        engine.on_intersection(id, 0.5, 0.0);
        engine.advance(700.0);
        assert_eq!(engine.states(id), vec![Visibility::Visible]);

        engine.on_intersection(id, 0.0, 800.0);
        assert!(!engine.on_intersection(id, 0.5, 900.0));
        engine.advance(900.0);
        assert_eq!(engine.states(id), vec![Visibility::Visible]);
    }

    #[test]
    fn unavailable_capability_reveals_without_events() {
        let mut engine = RevealEngine::new(ObserveOptions::default(), Capability::Unavailable);
        let id = engine.watch_group(StaggerConfig::default(), 2, 0.0, 0.0);
        assert!(engine.is_triggered(id));
        engine.advance(10_000.0);
        assert_eq!(engine.states(id), vec![Visibility::Visible; 2]);
    }

    #[test]
    fn groups_are_independent() {
        let mut engine = engine();
        let a = engine.watch_group(StaggerConfig::default(), 1, 0.0, 0.0);
        let b = engine.watch_group(StaggerConfig::default(), 1, 0.0, 0.0);
        engine.on_intersection(b, 1.0, 0.0);
        engine.advance(1_000.0);
        assert_eq!(engine.states(a), vec![Visibility::Unseen]);
        assert_eq!(engine.states(b), vec![Visibility::Visible]);
    }

    #[test]
    fn unwatch_drops_the_group() {
        let mut engine = engine();
        let id = engine.watch_group(StaggerConfig::default(), 2, 0.0, 0.0);
        engine.unwatch(id);
        assert!(engine.states(id).is_empty());
        assert!(!engine.on_intersection(id, 1.0, 0.0));
    }

    #[test]
    fn reveal_all_settles_every_group() {
        let mut engine = engine();
        let a = engine.watch_group(StaggerConfig::default(), 3, 0.0, 0.0);
        engine.reveal_all(5.0);
        assert_eq!(engine.states(a), vec![Visibility::Visible; 3]);
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn style_classes() {
        assert_eq!(RevealStyle::default().class(), "reveal--fade-up");
        assert_eq!(RevealStyle::SlideRight.class(), "reveal--slide-right");
    }
}
