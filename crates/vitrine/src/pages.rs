//! Page section layout, intersection tracking and rendering.
//!
//! Sections are laid out in a vertical flow of rows. Each frame the
//! app computes how much of every section overlaps the scrolled
//! viewport and feeds that ratio to the section's reveal, then draws
//! the sections the reveals have made visible, applying their entrance
//! transition.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vitrine_core::{AnimationSpeed, ColorTheme, Page, RevealKind};
use vitrine_effects::{Reveal, RevealConfig};

/// Blank rows between sections.
const SECTION_GAP: u16 = 2;

/// Left margin of section text inside the content area.
const TEXT_MARGIN: u16 = 2;

/// A mounted page: its sections plus one reveal per section.
#[derive(Debug)]
pub struct PageView {
    sections: &'static [vitrine_content::Section],
    reveals: Vec<Reveal>,
}

impl PageView {
    /// Mount a page, creating fresh reveals for its sections. With
    /// reduced motion the reveals are pinned visible from the start.
    pub fn mount(page: Page, reduced_motion: bool) -> Self {
        let sections = vitrine_content::sections(page);
        let reveals = sections
            .iter()
            .map(|section| {
                let config = RevealConfig {
                    kind: section.kind,
                    delay_ms: section.delay_ms,
                    ..RevealConfig::default()
                };
                if reduced_motion {
                    Reveal::always_visible(config)
                } else {
                    Reveal::new(config)
                }
            })
            .collect();
        Self { sections, reveals }
    }

    /// Unmount: cancel every pending reveal timer.
    pub fn unmount(&mut self) {
        for reveal in &mut self.reveals {
            reveal.cancel();
        }
    }

    /// Total flow height of the page content, in rows.
    pub fn total_height(&self) -> f32 {
        let mut top = 1.0;
        for section in self.sections {
            top += section_height(section) + SECTION_GAP as f32;
        }
        top
    }

    /// Observe, tick and draw every section for this frame.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        scroll: f32,
        now_ms: u64,
        speed: AnimationSpeed,
        theme: ColorTheme,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut top = 1.0;
        for (section, reveal) in self.sections.iter().zip(self.reveals.iter_mut()) {
            let height = section_height(section);
            let ratio = visible_ratio(top - scroll, height, area.height);
            reveal.observe(ratio, now_ms);
            reveal.tick(now_ms);

            if reveal.is_visible() {
                draw_section(frame, area, section, reveal, top - scroll, now_ms, speed, theme);
            }

            top += height + SECTION_GAP as f32;
        }
    }
}

fn section_height(section: &vitrine_content::Section) -> f32 {
    // Heading row plus one blank row plus the body.
    (2 + section.body.len()) as f32
}

/// Fraction of a section inside the viewport, in `[0, 1]`.
fn visible_ratio(top: f32, height: f32, viewport: u16) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let bottom = top + height;
    let overlap = bottom.min(viewport as f32) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Row and column displacement of an entrance in progress, plus
/// whether the text is still dimmed.
fn entrance(kind: RevealKind, progress: f32) -> (i32, i32, bool) {
    let settling = progress < 1.0;
    let slide = |span: f32| (span * (1.0 - progress)).round() as i32;
    match kind {
        RevealKind::SlideUp => (0, slide(3.0), settling),
        RevealKind::SlideDown => (0, -slide(3.0), settling),
        RevealKind::SlideLeft => (slide(8.0), 0, settling),
        RevealKind::SlideRight => (-slide(8.0), 0, settling),
        RevealKind::BounceIn => {
            let wobble = (progress * std::f32::consts::PI * 2.0).sin() * (1.0 - progress) * 2.0;
            (0, wobble.round() as i32, settling)
        }
        _ => (0, 0, settling),
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_section(
    frame: &mut Frame,
    area: Rect,
    section: &vitrine_content::Section,
    reveal: &Reveal,
    top: f32,
    now_ms: u64,
    speed: AnimationSpeed,
    theme: ColorTheme,
) {
    let duration = speed.entrance_duration_ms().max(1);
    let progress = (reveal.age_ms(now_ms) as f32 / duration as f32).min(1.0);
    let (dx, dy, dim) = entrance(reveal.kind(), progress);

    let heading_style = if dim {
        Style::new().fg(theme.grid())
    } else {
        Style::new()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD)
    };
    let body_style = if dim {
        Style::new().fg(Color::DarkGray)
    } else {
        Style::new().fg(Color::Gray)
    };

    let base_row = top.round() as i32 + dy;
    draw_line(frame, area, dx, base_row, section.heading, heading_style);
    for (i, text) in section.body.iter().enumerate() {
        draw_line(frame, area, dx, base_row + 2 + i as i32, text, body_style);
    }
}

/// Draw one row of text at a flow position, clipped to the area.
fn draw_line(frame: &mut Frame, area: Rect, dx: i32, row: i32, text: &str, style: Style) {
    if text.is_empty() || row < 0 || row >= area.height as i32 {
        return;
    }
    let x = TEXT_MARGIN as i32 + dx;
    if x >= area.width as i32 {
        return;
    }
    let x = x.max(0) as u16;
    let rect = Rect {
        x: area.x + x,
        y: area.y + row as u16,
        width: area.width - x,
        height: 1,
    };
    let line = Line::from(Span::styled(text.to_string(), style));
    frame.render_widget(Paragraph::new(line), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_zero_when_fully_below_the_fold() {
        assert_eq!(visible_ratio(30.0, 5.0, 24), 0.0);
    }

    #[test]
    fn ratio_is_one_when_fully_inside() {
        assert_eq!(visible_ratio(4.0, 5.0, 24), 1.0);
    }

    #[test]
    fn ratio_is_partial_at_the_fold() {
        // Two of four rows peek above the bottom edge.
        assert_eq!(visible_ratio(22.0, 4.0, 24), 0.5);
    }

    #[test]
    fn ratio_handles_sections_scrolled_past_the_top() {
        assert_eq!(visible_ratio(-2.0, 4.0, 24), 0.5);
        assert_eq!(visible_ratio(-10.0, 4.0, 24), 0.0);
    }

    #[test]
    fn slides_settle_to_rest() {
        for kind in RevealKind::ALL {
            let (dx, dy, dim) = entrance(kind, 1.0);
            assert_eq!((dx, dy), (0, 0), "{kind:?} did not settle");
            assert!(!dim);
        }
    }

    #[test]
    fn slide_up_starts_below_its_slot() {
        let (dx, dy, dim) = entrance(RevealKind::SlideUp, 0.0);
        assert_eq!(dx, 0);
        assert!(dy > 0);
        assert!(dim);
    }

    #[test]
    fn mounted_view_tracks_section_count() {
        let view = PageView::mount(Page::Home, false);
        assert_eq!(view.reveals.len(), view.sections.len());
        assert!(view.total_height() > 0.0);
    }

    #[test]
    fn reduced_motion_mounts_everything_visible() {
        let view = PageView::mount(Page::Partners, true);
        assert!(view.reveals.iter().all(|r| r.is_visible()));
    }
}
