use serde::{Deserialize, Serialize};

use super::visibility::{ElementId, Visibility, WatchedElement};

/// Timing curve tag handed to the render layer as CSS.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    /// The soft overshoot used on the approach and footer cards.
    Smooth,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::Smooth => "cubic-bezier(0.23, 1, 0.32, 1)".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!("cubic-bezier({}, {}, {}, {})", a, b, c, d),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerConfig {
    pub initial_delay_ms: f64,
    pub step_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 0.0,
            step_ms: 100.0,
            duration_ms: 700.0,
            easing: Easing::EaseOut,
        }
    }
}

impl StaggerConfig {
    pub fn with_step(mut self, step_ms: f64) -> Self {
        self.step_ms = step_ms;
        self
    }

    pub fn with_initial_delay(mut self, initial_delay_ms: f64) -> Self {
        self.initial_delay_ms = initial_delay_ms;
        self
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn offset(&self, index: usize) -> f64 {
        self.initial_delay_ms.max(0.0) + index as f64 * self.step_ms.max(0.0)
    }
}

/// Ordered members sharing one stagger configuration.
///
/// Member `i` starts entering `initial_delay_ms + i * step_ms` after the
/// first trigger and becomes visible `duration_ms` later. Insertion order is
/// the only ordering; re-triggering never reshuffles it.
#[derive(Debug, Clone)]
pub struct RevealGroup {
    config: StaggerConfig,
    members: Vec<WatchedElement>,
    triggered_at: Option<f64>,
}

impl RevealGroup {
    pub fn new(config: StaggerConfig, ids: impl IntoIterator<Item = ElementId>, now: f64) -> Self {
        let members = ids
            .into_iter()
            .map(|id| WatchedElement {
                id,
                state: Visibility::Unseen,
                registered_at: now,
            })
            .collect();
        Self {
            config,
            members,
            triggered_at: None,
        }
    }

    pub fn config(&self) -> &StaggerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn triggered_at(&self) -> Option<f64> {
        self.triggered_at
    }

    /// Starts the stagger clock. Only the first trigger counts.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.triggered_at.is_some() {
            return false;
        }
        self.triggered_at = Some(now);
        true
    }

    pub fn start_of(&self, index: usize) -> Option<f64> {
        if index >= self.members.len() {
            return None;
        }
        self.triggered_at.map(|t| t + self.config.offset(index))
    }

    /// Moves members along `Unseen -> Entering -> Visible` for the current
    /// time. Members only ever move forward, so an earlier `now` is a no-op.
    /// Returns whether anything changed.
    pub fn advance(&mut self, now: f64) -> bool {
        let Some(triggered_at) = self.triggered_at else {
            return false;
        };
        let duration = self.config.duration_ms.max(0.0);
        let mut changed = false;

        for (index, member) in self.members.iter_mut().enumerate() {
            if member.state == Visibility::Visible {
                continue;
            }
            let start = triggered_at + self.config.offset(index);
            let next = if now >= start + duration {
                Visibility::Visible
            } else if now >= start {
                Visibility::Entering
            } else {
                Visibility::Unseen
            };
            if next > member.state {
                member.state = next;
                changed = true;
            }
        }
        changed
    }

    /// Earliest instant at which `advance` would change a member.
    pub fn next_deadline(&self) -> Option<f64> {
        let triggered_at = self.triggered_at?;
        let duration = self.config.duration_ms.max(0.0);
        self.members
            .iter()
            .enumerate()
            .filter_map(|(index, member)| {
                let start = triggered_at + self.config.offset(index);
                match member.state {
                    Visibility::Unseen => Some(start),
                    Visibility::Entering => Some(start + duration),
                    Visibility::Visible => None,
                }
            })
            .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.min(t))))
    }

    /// Fail-open path: everything is shown at once.
    pub fn reveal_all(&mut self, now: f64) {
        if self.triggered_at.is_none() {
            self.triggered_at = Some(now);
        }
        for member in &mut self.members {
            member.state = Visibility::Visible;
        }
    }

    pub fn state(&self, index: usize) -> Visibility {
        self.members
            .get(index)
            .map(|m| m.state)
            .unwrap_or(Visibility::Visible)
    }

    pub fn states(&self) -> Vec<Visibility> {
        self.members.iter().map(|m| m.state).collect()
    }

    pub fn members(&self) -> &[WatchedElement] {
        &self.members
    }

    pub fn is_settled(&self) -> bool {
        self.members.iter().all(|m| m.state == Visibility::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(n: u32, step: f64, duration: f64) -> RevealGroup {
        let config = StaggerConfig::default()
            .with_step(step)
            .with_duration(duration);
        RevealGroup::new(config, 0..n, 0.0)
    }

    #[test]
    fn nothing_moves_before_trigger() {
        let mut g = group(3, 100.0, 700.0);
        assert!(!g.advance(10_000.0));
        assert_eq!(g.states(), vec![Visibility::Unseen; 3]);
        assert_eq!(g.next_deadline(), None);
    }

    #[test]
    fn members_start_no_earlier_than_index_times_step() {
        let mut g = group(4, 100.0, 700.0);
        g.trigger(1_000.0);

        for i in 0..4 {
            let start = g.start_of(i).unwrap();
            assert!(start >= 1_000.0 + i as f64 * 100.0);
            if i > 0 {
                assert!(start > g.start_of(i - 1).unwrap());
            }
        }

        g.advance(1_150.0);
        assert_eq!(
            g.states(),
            vec![
                Visibility::Entering,
                Visibility::Entering,
                Visibility::Unseen,
                Visibility::Unseen
            ]
        );
    }

    #[test]
    fn first_member_reveals_on_the_trigger_tick() {
        let mut g = group(2, 100.0, 700.0);
        g.trigger(50.0);
        assert_eq!(g.next_deadline(), Some(50.0));
        assert!(g.advance(50.0));
        assert_eq!(g.state(0), Visibility::Entering);
    }

    #[test]
    fn members_become_visible_after_duration() {
        let mut g = group(3, 100.0, 700.0);
        g.trigger(0.0);
        g.advance(750.0);
        assert_eq!(
            g.states(),
            vec![Visibility::Visible, Visibility::Entering, Visibility::Entering]
        );
        g.advance(900.0);
        assert!(g.is_settled());
        assert_eq!(g.next_deadline(), None);
    }

    #[test]
    fn retrigger_does_not_reorder_or_restart() {
        let mut g = group(3, 100.0, 700.0);
        assert!(g.trigger(0.0));
        assert!(!g.trigger(500.0));
        assert_eq!(g.triggered_at(), Some(0.0));
        assert_eq!(g.start_of(2), Some(200.0));
    }

    #[test]
    fn visible_is_terminal() {
        let mut g = group(1, 100.0, 100.0);
        g.trigger(0.0);
        g.advance(200.0);
        assert_eq!(g.state(0), Visibility::Visible);
        // an earlier clock reading (e.g. re-entry bookkeeping) cannot regress it
        assert!(!g.advance(0.0));
        g.trigger(300.0);
        g.advance(300.0);
        assert_eq!(g.state(0), Visibility::Visible);
    }

    #[test]
    fn earlier_clock_reading_never_hides_an_entering_member() {
        let mut g = group(2, 100.0, 700.0);
        g.trigger(1_000.0);
        g.advance(1_100.0);
        assert_eq!(g.states(), vec![Visibility::Entering, Visibility::Entering]);

        assert!(!g.advance(900.0));
        assert_eq!(g.states(), vec![Visibility::Entering, Visibility::Entering]);
        // deadlines still point at the pending Visible transitions
        assert_eq!(g.next_deadline(), Some(1_700.0));
    }

    #[test]
    fn deadlines_walk_through_every_transition() {
        let mut g = group(2, 100.0, 300.0);
        g.trigger(0.0);
        let mut seen = Vec::new();
        while let Some(deadline) = g.next_deadline() {
            g.advance(deadline);
            seen.push(deadline);
        }
        assert_eq!(seen, vec![0.0, 100.0, 300.0, 400.0]);
        assert!(g.is_settled());
    }

    #[test]
    fn initial_delay_offsets_every_member() {
        let config = StaggerConfig::default().with_initial_delay(100.0);
        let mut g = RevealGroup::new(config, 0..6, 0.0);
        g.trigger(0.0);
        assert_eq!(g.start_of(0), Some(100.0));
        assert_eq!(g.start_of(5), Some(600.0));
        assert_eq!(g.start_of(6), None);
    }

    #[test]
    fn reveal_all_shows_everything() {
        let mut g = group(5, 100.0, 700.0);
        g.reveal_all(3.0);
        assert!(g.is_settled());
        assert_eq!(g.triggered_at(), Some(3.0));
    }

    #[test]
    fn easing_renders_css() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::Smooth.css(), "cubic-bezier(0.23, 1, 0.32, 1)");
        assert_eq!(
            Easing::CubicBezier(0.6, -0.05, 0.01, 0.99).css(),
            "cubic-bezier(0.6, -0.05, 0.01, 0.99)"
        );
    }
}
