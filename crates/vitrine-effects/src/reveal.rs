//! Scroll-triggered reveal state machine.
//!
//! A `Reveal` watches how much of its section is inside the viewport
//! and flips a visibility flag the first time the intersection ratio
//! crosses the configured threshold, optionally after a delay. The
//! owning view calls [`Reveal::observe`] with the current ratio and
//! [`Reveal::tick`] once per frame to fire pending delayed flips.

use vitrine_core::RevealKind;

/// Configuration for a single reveal.
#[derive(Debug, Clone, Copy)]
pub struct RevealConfig {
    /// Fraction of the section that must be visible, in `[0, 1]`.
    pub threshold: f32,
    /// Entrance transition used once visible.
    pub kind: RevealKind,
    /// Wait this long after crossing the threshold before showing.
    pub delay_ms: u64,
    /// Show once and stay shown, or track visibility both ways.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            kind: RevealKind::FadeIn,
            delay_ms: 0,
            once: true,
        }
    }
}

impl RevealConfig {
    /// Config with an explicit kind and delay, keeping the other defaults.
    pub fn with_kind(kind: RevealKind, delay_ms: u64) -> Self {
        Self {
            kind,
            delay_ms,
            ..Self::default()
        }
    }
}

/// Reveal state for one mounted section.
#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    visible: bool,
    has_triggered: bool,
    /// Deadline of the single scheduled visibility flip, if any.
    pending: Option<u64>,
    /// When visibility last flipped on, for entrance styling.
    revealed_at: Option<u64>,
}

impl Reveal {
    /// Create a hidden, untriggered reveal.
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visible: false,
            has_triggered: false,
            pending: None,
            revealed_at: None,
        }
    }

    /// Degraded mode for hosts without an intersection source: visible
    /// immediately and permanently, with no entrance transition.
    pub fn always_visible(config: RevealConfig) -> Self {
        Self {
            config,
            visible: true,
            has_triggered: true,
            pending: None,
            revealed_at: None,
        }
    }

    /// Feed the current intersection ratio of the watched section.
    pub fn observe(&mut self, ratio: f32, now_ms: u64) {
        if ratio >= self.config.threshold {
            // A completed one-shot never re-triggers, and a pending
            // flip is never scheduled twice.
            if self.has_triggered && self.config.once {
                return;
            }
            if self.visible || self.pending.is_some() {
                return;
            }
            if self.config.delay_ms > 0 {
                self.pending = Some(now_ms + self.config.delay_ms);
            } else {
                self.show(now_ms);
            }
        } else if !self.config.once && self.visible {
            // Hiding is immediate, no delay. A pending flip is left
            // alone: if the section leaves the viewport during the
            // delay window the flip still fires.
            self.visible = false;
        }
    }

    /// Fire a due delayed flip. Call once per frame.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(deadline) = self.pending
            && now_ms >= deadline
        {
            self.pending = None;
            self.show(now_ms);
        }
    }

    /// Teardown: drop any scheduled flip. Mandatory when the owning
    /// section unmounts, e.g. on page switch.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn show(&mut self, now_ms: u64) {
        self.visible = true;
        self.has_triggered = true;
        self.revealed_at = Some(now_ms);
    }

    /// Whether the section should currently be rendered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the reveal has fired at least once.
    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    /// Style class selector for the configured transition. Meaningful
    /// only while [`Reveal::is_visible`] returns true; callers branch
    /// on visibility first.
    pub fn class_name(&self) -> &'static str {
        self.config.kind.class_name()
    }

    /// Configured transition kind.
    pub fn kind(&self) -> RevealKind {
        self.config.kind
    }

    /// Milliseconds since visibility last flipped on.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        self.revealed_at
            .map(|at| now_ms.saturating_sub(at))
            .unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(threshold: f32, kind: RevealKind, delay_ms: u64, once: bool) -> RevealConfig {
        RevealConfig {
            threshold,
            kind,
            delay_ms,
            once,
        }
    }

    #[test]
    fn immediate_trigger_at_threshold() {
        let mut reveal = Reveal::new(RevealConfig::default());
        assert!(!reveal.is_visible());
        reveal.observe(0.1, 0);
        assert!(reveal.is_visible());
        assert!(reveal.has_triggered());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = Reveal::new(config(0.5, RevealKind::FadeIn, 0, true));
        reveal.observe(0.49, 0);
        reveal.tick(1000);
        assert!(!reveal.is_visible());
    }

    #[test]
    fn delayed_flip_fires_on_schedule_and_sticks() {
        // Intersection at t=0 with a 100ms delay: hidden at t=50,
        // shown at t=100, still shown after leaving the viewport.
        let mut reveal = Reveal::new(config(0.1, RevealKind::SlideUp, 100, true));
        reveal.observe(0.5, 0);
        reveal.tick(50);
        assert!(!reveal.is_visible());
        reveal.tick(100);
        assert!(reveal.is_visible());
        reveal.observe(0.0, 200);
        reveal.tick(200);
        assert!(reveal.is_visible());
        assert_eq!(reveal.class_name(), "animate-slide-up");
    }

    #[test]
    fn once_triggers_exactly_once() {
        let mut reveal = Reveal::new(config(0.2, RevealKind::ZoomIn, 0, true));
        reveal.observe(0.9, 0);
        assert!(reveal.is_visible());
        let first_age = reveal.age_ms(500);
        // Further intersection events change nothing.
        reveal.observe(0.0, 100);
        reveal.observe(0.9, 200);
        reveal.tick(300);
        assert!(reveal.is_visible());
        assert_eq!(reveal.age_ms(500), first_age);
    }

    #[test]
    fn repeatable_reveal_toggles_both_ways() {
        let mut reveal = Reveal::new(config(0.3, RevealKind::FadeIn, 0, false));
        reveal.observe(0.4, 0);
        assert!(reveal.is_visible());
        // Hiding is immediate, no delay involved.
        reveal.observe(0.1, 10);
        assert!(!reveal.is_visible());
        reveal.observe(0.8, 20);
        assert!(reveal.is_visible());
    }

    #[test]
    fn pending_flip_survives_viewport_exit() {
        let mut reveal = Reveal::new(config(0.1, RevealKind::FadeIn, 100, false));
        reveal.observe(0.5, 0);
        reveal.observe(0.0, 40);
        reveal.tick(100);
        assert!(reveal.is_visible());
    }

    #[test]
    fn repeated_observations_schedule_one_flip() {
        let mut reveal = Reveal::new(config(0.1, RevealKind::FadeIn, 100, true));
        reveal.observe(0.5, 0);
        reveal.observe(0.6, 30);
        reveal.observe(0.7, 60);
        reveal.tick(99);
        assert!(!reveal.is_visible());
        reveal.tick(100);
        assert!(reveal.is_visible());
        // The later observations did not push the deadline back.
        assert_eq!(reveal.age_ms(100), 0);
    }

    #[test]
    fn cancel_drops_scheduled_flip() {
        let mut reveal = Reveal::new(config(0.1, RevealKind::FadeIn, 50, true));
        reveal.observe(0.5, 0);
        reveal.cancel();
        reveal.tick(1000);
        assert!(!reveal.is_visible());
        assert!(!reveal.has_triggered());
    }

    #[test]
    fn always_visible_fallback() {
        let reveal = Reveal::always_visible(RevealConfig::default());
        assert!(reveal.is_visible());
        assert!(reveal.has_triggered());
    }
}
