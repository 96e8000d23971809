//! Glitch burst effect for headings.
//!
//! Checked on a fixed interval; each check starts a short burst with
//! the configured probability. During a burst the text is distorted in
//! one of three ways: jittered rainbow text, katakana substitution, or
//! a scanline blank-out. Outside a burst the text passes through
//! untouched.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use vitrine_core::SeedRng;

use crate::chars::MATRIX_CHARS;
use crate::color::hsl_to_rgb;

/// Distortion flavor for a glitch burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchKind {
    Text,
    Matrix,
    Scanline,
    /// Pick one of the three concrete kinds per burst.
    Random,
}

impl GlitchKind {
    const CONCRETE: [GlitchKind; 3] = [GlitchKind::Text, GlitchKind::Matrix, GlitchKind::Scanline];
}

/// Glitch state for one decorated line of text.
#[derive(Debug)]
pub struct Glitch {
    /// Probability of a burst per interval check.
    intensity: f32,
    /// Interval between burst checks.
    interval_ms: u64,
    kind: GlitchKind,
    next_check_ms: u64,
    burst_end_ms: u64,
    burst_kind: GlitchKind,
    /// Seed frozen for the current burst so its distortion is stable
    /// across frames.
    burst_seed: u64,
}

impl Glitch {
    /// Glitch with the default tuning: 10% chance every 2 seconds.
    pub fn new(kind: GlitchKind) -> Self {
        Self::with_tuning(kind, 0.1, 2000)
    }

    /// Glitch with explicit probability and check interval.
    pub fn with_tuning(kind: GlitchKind, intensity: f32, interval_ms: u64) -> Self {
        Self {
            intensity,
            interval_ms: interval_ms.max(1),
            kind,
            next_check_ms: interval_ms.max(1),
            burst_end_ms: 0,
            burst_kind: GlitchKind::Text,
            burst_seed: 0,
        }
    }

    /// Run due interval checks, possibly starting a burst of 50-250ms.
    pub fn update(&mut self, now_ms: u64, rng: &mut SeedRng) {
        while now_ms >= self.next_check_ms {
            self.next_check_ms += self.interval_ms;
            if rng.chance(self.intensity) {
                self.burst_kind = match self.kind {
                    GlitchKind::Random => GlitchKind::CONCRETE[rng.pick(3)],
                    kind => kind,
                };
                self.burst_end_ms = now_ms + 50 + (rng.next_f32() * 200.0) as u64;
                self.burst_seed = rng.next_u64();
            }
        }
    }

    /// Whether a burst is currently running.
    pub fn is_active(&self, now_ms: u64) -> bool {
        now_ms < self.burst_end_ms
    }

    /// Distort `text` if a burst is active, otherwise return it styled
    /// as given.
    pub fn apply(&self, text: &str, now_ms: u64, base: Style) -> Line<'static> {
        if !self.is_active(now_ms) {
            return Line::from(Span::styled(text.to_string(), base));
        }

        let seed = self.burst_seed as usize;
        match self.burst_kind {
            GlitchKind::Text => {
                // Horizontal jitter plus per-character hue rotation.
                let mut spans = vec![Span::raw(" ".repeat(seed % 3))];
                for (i, ch) in text.chars().enumerate() {
                    let hue = ((seed.wrapping_add(i.wrapping_mul(37))) % 360) as f32;
                    let color = hsl_to_rgb(hue, 0.9, 0.6);
                    spans.push(Span::styled(ch.to_string(), Style::new().fg(color)));
                }
                Line::from(spans)
            }
            GlitchKind::Matrix => {
                let spans: Vec<Span> = text
                    .chars()
                    .enumerate()
                    .map(|(i, ch)| {
                        if ch != ' ' && (seed.wrapping_add(i.wrapping_mul(31))) % 10 < 3 {
                            let idx = seed.wrapping_add(i.wrapping_mul(17)) % MATRIX_CHARS.len();
                            Span::styled(
                                MATRIX_CHARS[idx].to_string(),
                                Style::new().fg(Color::Rgb(80, 250, 123)),
                            )
                        } else {
                            Span::styled(ch.to_string(), base)
                        }
                    })
                    .collect();
                Line::from(spans)
            }
            GlitchKind::Scanline | GlitchKind::Random => {
                let spans: Vec<Span> = text
                    .chars()
                    .enumerate()
                    .map(|(i, ch)| {
                        if (i + seed) % 2 == 0 {
                            Span::raw(" ")
                        } else {
                            Span::styled(ch.to_string(), base)
                        }
                    })
                    .collect();
                Line::from(spans)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_intensity_never_bursts() {
        let mut glitch = Glitch::with_tuning(GlitchKind::Random, 0.0, 100);
        let mut rng = SeedRng::from_seed(1);
        for t in 0..100u64 {
            glitch.update(t * 100, &mut rng);
            assert!(!glitch.is_active(t * 100));
        }
    }

    #[test]
    fn certain_intensity_bursts_within_bounds() {
        let mut glitch = Glitch::with_tuning(GlitchKind::Text, 1.0, 100);
        let mut rng = SeedRng::from_seed(2);
        glitch.update(100, &mut rng);
        assert!(glitch.is_active(100));
        // Bursts last 50-250ms.
        assert!(glitch.burst_end_ms >= 150);
        assert!(glitch.burst_end_ms <= 350);
        assert!(!glitch.is_active(400));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let run = || {
            let mut glitch = Glitch::with_tuning(GlitchKind::Random, 0.5, 200);
            let mut rng = SeedRng::from_seed(99);
            let mut active = Vec::new();
            for t in (0..5000u64).step_by(100) {
                glitch.update(t, &mut rng);
                active.push(glitch.is_active(t));
            }
            active
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn inactive_apply_is_identity_text() {
        let glitch = Glitch::new(GlitchKind::Random);
        let line = glitch.apply("NEOBYTE", 0, Style::new());
        let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, "NEOBYTE");
    }

    #[test]
    fn scanline_blanks_alternating_characters() {
        let mut glitch = Glitch::with_tuning(GlitchKind::Scanline, 1.0, 100);
        let mut rng = SeedRng::from_seed(5);
        glitch.update(100, &mut rng);
        assert!(glitch.is_active(120));
        let line = glitch.apply("ABCDEF", 120, Style::new());
        let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        let blanks = joined.chars().filter(|c| *c == ' ').count();
        assert_eq!(blanks, 3);
        assert_eq!(joined.len(), 6);
    }
}
