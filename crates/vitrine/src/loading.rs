//! Boot screen shown before the site.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Gauge, Paragraph},
};
use vitrine_content::{BRAND, build_logo_art};
use vitrine_core::{ColorTheme, SeedRng};

/// Progress tick cadence.
const TICK_MS: u64 = 150;

/// How long the full bar lingers before handing off.
const LINGER_MS: u64 = 1000;

/// Status message rotation cadence.
const MESSAGE_MS: u64 = 2000;

/// Ellipsis animation cadence.
const DOTS_MS: u64 = 500;

const MESSAGES: [&str; 6] = [
    "Initializing systems",
    "Loading neural cores",
    "Calibrating pixels",
    "Warming up the grid",
    "Preparing interface",
    "Almost ready",
];

/// Boot progress state.
#[derive(Debug)]
pub struct Loading {
    progress: f32,
    last_tick_ms: u64,
    done_at_ms: Option<u64>,
}

impl Loading {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            last_tick_ms: 0,
            done_at_ms: None,
        }
    }

    /// Advance the bar on its tick cadence. Each tick gains a random
    /// 3-15 points; at 100 the bar lingers briefly before finishing.
    pub fn update(&mut self, now_ms: u64, rng: &mut SeedRng) {
        while now_ms.saturating_sub(self.last_tick_ms) >= TICK_MS {
            self.last_tick_ms += TICK_MS;
            if self.progress < 100.0 {
                self.progress = (self.progress + 3.0 + rng.next_f32() * 12.0).min(100.0);
                if self.progress >= 100.0 {
                    self.done_at_ms = Some(now_ms + LINGER_MS);
                }
            }
        }
    }

    /// Whether the boot screen is done and the site should take over.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.done_at_ms.is_some_and(|done| now_ms >= done)
    }

    /// Current progress in `[0, 100]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn render(&self, frame: &mut Frame, now_ms: u64, theme: ColorTheme) {
        let area = frame.area();

        // Tiny terminals get the status line alone.
        if area.height < 12 || area.width < 20 {
            let status = Paragraph::new(format!("loading {:>3.0}%", self.progress))
                .style(Style::new().fg(theme.accent()))
                .alignment(Alignment::Center);
            frame.render_widget(status, area);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7), // logo
            Constraint::Length(1),
            Constraint::Length(1), // gauge
            Constraint::Length(1),
            Constraint::Length(1), // status
            Constraint::Fill(1),
        ])
        .split(area);

        let logo: Vec<Line> = build_logo_art(BRAND)
            .into_iter()
            .map(|row| Line::from(row).style(Style::new().fg(theme.accent())))
            .collect();
        frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);

        let gauge_width = (area.width / 2).max(10).min(area.width);
        let gauge_area = ratatui::layout::Rect {
            x: area.x + (area.width - gauge_width) / 2,
            y: chunks[3].y,
            width: gauge_width,
            height: 1,
        };
        let gauge = Gauge::default()
            .ratio(f64::from(self.progress) / 100.0)
            .gauge_style(Style::new().fg(theme.accent()).bg(Color::DarkGray))
            .label(format!("{:>3.0}%", self.progress));
        frame.render_widget(gauge, gauge_area);

        let message = MESSAGES[((now_ms / MESSAGE_MS) as usize) % MESSAGES.len()];
        let dots = ".".repeat(((now_ms / DOTS_MS) % 4) as usize);
        let status = Paragraph::new(format!("{message}{dots}"))
            .style(Style::new().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[5]);
    }
}

impl Default for Loading {
    fn default() -> Self {
        Self::new()
    }
}
