//! Retro cursor overlay with a fading trail.
//!
//! Follows the terminal mouse, leaves occasional trail cells that
//! expire after half a second, and sometimes bounces or glitches for a
//! few frames. Painted directly into the frame buffer after everything
//! else so it sits on top.

use ratatui::{Frame, style::Style};
use vitrine_core::{ColorTheme, SeedRng};

/// Lifetime of one trail cell.
const TRAIL_TTL_MS: u64 = 500;

/// Interval between micro-glitch checks.
const GLITCH_CHECK_MS: u64 = 2000;

/// A click within this window spins the trail cells it spawns.
const CLICK_TRAIL_WINDOW_MS: u64 = 300;

#[derive(Debug, Clone)]
struct TrailCell {
    x: u16,
    y: u16,
    expires_ms: u64,
    spin: bool,
}

/// Cursor overlay state.
#[derive(Debug)]
pub struct CursorFx {
    x: u16,
    y: u16,
    /// No overlay until the mouse first moves.
    seen: bool,
    clicking: bool,
    hovering: bool,
    bounce_until_ms: u64,
    glitch_until_ms: u64,
    next_glitch_check_ms: u64,
    last_click_ms: u64,
    trail: Vec<TrailCell>,
}

impl CursorFx {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            seen: false,
            clicking: false,
            hovering: false,
            bounce_until_ms: 0,
            glitch_until_ms: 0,
            next_glitch_check_ms: GLITCH_CHECK_MS,
            last_click_ms: 0,
            trail: Vec::new(),
        }
    }

    /// Track a mouse move, occasionally bouncing or dropping a trail
    /// cell behind the cursor.
    pub fn on_move(&mut self, x: u16, y: u16, now_ms: u64, rng: &mut SeedRng) {
        self.x = x;
        self.y = y;
        self.seen = true;

        if rng.chance(0.01) {
            self.bounce_until_ms = now_ms + 200;
        }
        if rng.chance(0.02) {
            let spin = now_ms.saturating_sub(self.last_click_ms) < CLICK_TRAIL_WINDOW_MS;
            self.trail.push(TrailCell {
                x,
                y,
                expires_ms: now_ms + TRAIL_TTL_MS,
                spin,
            });
        }
    }

    pub fn on_down(&mut self, now_ms: u64) {
        self.clicking = true;
        self.last_click_ms = now_ms;
    }

    pub fn on_up(&mut self) {
        self.clicking = false;
    }

    /// Set by the app when the cursor sits over an interactive row.
    pub fn set_hover(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Current cursor cell.
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Retire expired trail cells and run the micro-glitch check.
    pub fn update(&mut self, now_ms: u64, rng: &mut SeedRng) {
        self.trail.retain(|cell| cell.expires_ms > now_ms);

        while now_ms >= self.next_glitch_check_ms {
            self.next_glitch_check_ms += GLITCH_CHECK_MS;
            if rng.chance(0.005) {
                self.glitch_until_ms = now_ms + 50;
            }
        }
    }

    /// Number of live trail cells.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Paint the trail and the cursor glyph over the finished frame.
    pub fn render(&self, frame: &mut Frame, now_ms: u64, theme: ColorTheme) {
        if !self.seen {
            return;
        }

        let buffer = frame.buffer_mut();

        for cell in &self.trail {
            let glyph = if cell.spin { '✦' } else { '·' };
            if let Some(target) = buffer.cell_mut((cell.x, cell.y)) {
                target.set_char(glyph);
                target.set_style(Style::new().fg(theme.grid()));
            }
        }

        let glyph = if self.clicking {
            '●'
        } else if self.hovering {
            '◈'
        } else {
            '◆'
        };

        let mut x = self.x;
        let mut y = self.y;
        if now_ms < self.bounce_until_ms {
            y = y.saturating_sub(1);
        }
        if now_ms < self.glitch_until_ms {
            x = x.saturating_add((now_ms % 3) as u16).saturating_sub(1);
        }

        if let Some(target) = buffer.cell_mut((x, y)) {
            target.set_char(glyph);
            target.set_style(Style::new().fg(theme.accent()));
        }
    }
}

impl Default for CursorFx {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_cells_expire() {
        let mut cursor = CursorFx::new();
        let mut rng = SeedRng::from_seed(1);
        // Enough moves that some trail cells spawn.
        for i in 0..600u64 {
            cursor.on_move((i % 40) as u16, 5, i, &mut rng);
        }
        assert!(cursor.trail_len() > 0);
        cursor.update(10_000, &mut rng);
        assert_eq!(cursor.trail_len(), 0);
    }

    #[test]
    fn click_state_follows_buttons() {
        let mut cursor = CursorFx::new();
        cursor.on_down(100);
        assert!(cursor.clicking);
        cursor.on_up();
        assert!(!cursor.clicking);
    }

    #[test]
    fn trail_spawned_after_click_spins() {
        let mut cursor = CursorFx::new();
        let mut rng = SeedRng::from_seed(2);
        cursor.on_down(1000);
        for i in 0..600u64 {
            cursor.on_move(10, 10, 1000 + (i % 250), &mut rng);
        }
        assert!(cursor.trail.iter().any(|cell| cell.spin));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let run = || {
            let mut cursor = CursorFx::new();
            let mut rng = SeedRng::from_seed(7);
            for i in 0..500u64 {
                cursor.on_move((i % 80) as u16, (i % 24) as u16, i * 5, &mut rng);
                cursor.update(i * 5, &mut rng);
            }
            (cursor.trail_len(), cursor.bounce_until_ms, cursor.glitch_until_ms)
        };
        assert_eq!(run(), run());
    }
}
