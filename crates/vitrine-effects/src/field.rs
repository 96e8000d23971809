//! Particle-field background with a parallax grid.
//!
//! A fixed pool of drifting shapes is rendered behind the page content
//! together with a grid whose horizontal lines shift with the page
//! scroll position. The pool is created once and never grows or
//! shrinks; resizing only re-reads the surface dimensions and lets the
//! particles drift back into view on their own.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vitrine_core::{AnimationSpeed, ColorTheme, SeedRng, Shape};

use crate::chars::{FILL, GRID_H, GRID_V, GRID_X, SMALL_CIRCLE, SMALL_SQUARE, SMALL_TRIANGLE};

/// Configuration for the particle field.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    /// Number of particles in the pool.
    pub particle_count: usize,
    /// Column spacing of the vertical grid lines.
    pub grid_cols: u16,
    /// Row spacing of the horizontal grid lines.
    pub grid_rows: u16,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            grid_cols: 8,
            grid_rows: 4,
        }
    }
}

/// One drifting background shape.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    pub shape: Shape,
}

/// Background state: the particle pool, surface dimensions and the
/// dampened scroll offset.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: u16,
    height: u16,
    grid_cols: u16,
    grid_rows: u16,
    scroll_offset: f32,
    last_update_ms: u64,
}

impl ParticleField {
    /// Create the field sized to the current surface, with exactly
    /// `config.particle_count` particles placed uniformly inside it.
    pub fn new(width: u16, height: u16, config: FieldConfig, rng: &mut SeedRng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                x: rng.range_f32(0.0, width.max(1) as f32),
                y: rng.range_f32(0.0, height.max(1) as f32),
                size: rng.range_f32(1.0, 4.0),
                vx: (rng.next_f32() - 0.5) * 0.5,
                vy: (rng.next_f32() - 0.5) * 0.5,
                shape: Shape::ALL[rng.pick(Shape::ALL.len())],
            })
            .collect();

        Self {
            particles,
            width,
            height,
            grid_cols: config.grid_cols.max(1),
            grid_rows: config.grid_rows.max(1),
            scroll_offset: 0.0,
            last_update_ms: 0,
        }
    }

    /// Store the dampened scroll offset for parallax drawing.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_offset = scroll_y * 0.3;
    }

    /// Current dampened scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Re-read surface dimensions. Particles keep their coordinates
    /// even when these now lie outside the surface.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Number of particles in the pool.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The particle pool.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance particle positions and reflect at the surface bounds.
    /// Reflection checks the raw position, not the scroll-adjusted draw
    /// position, so a particle can visually leave the bottom edge while
    /// scrolling before its true coordinate crosses the bound.
    pub fn update(&mut self, elapsed_ms: u64, speed: AnimationSpeed) {
        // Cap the delta so a stalled frame does not teleport particles.
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms).min(100);
        self.last_update_ms = elapsed_ms;

        let steps = delta_ms as f32 / 33.0 * speed.particle_drift_speed();
        let (w, h) = (self.width as f32, self.height as f32);

        for p in &mut self.particles {
            p.x += p.vx * steps;
            p.y += p.vy * steps;

            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }
        }
    }

    /// Render the background for this frame: grid first, then each
    /// particle at its scroll-adjusted draw position. A zero-area
    /// surface renders nothing.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        theme: ColorTheme,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if area.width != self.width || area.height != self.height {
            self.resize(area.width, area.height);
        }

        self.update(elapsed_ms, speed);

        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = vec![vec![(' ', Color::Reset); w]; h];

        self.draw_grid(&mut cells, theme);
        for p in &self.particles {
            let draw_y = p.y - self.scroll_offset * 0.5;
            draw_shape(&mut cells, p, draw_y, theme.accent());
        }

        let lines: Vec<Line> = cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|(ch, color)| {
                        if ch == ' ' {
                            Span::raw(" ")
                        } else {
                            Span::styled(ch.to_string(), Style::new().fg(color))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Vertical lines are static; horizontal lines shift by the scroll
    /// offset modulo the row spacing for the parallax illusion.
    fn draw_grid(&self, cells: &mut [Vec<(char, Color)>], theme: ColorTheme) {
        let w = self.width as usize;
        let h = self.height as usize;
        let color = theme.grid();

        for x in (0..w).step_by(self.grid_cols as usize) {
            for row in cells.iter_mut() {
                row[x] = (GRID_V, color);
            }
        }

        let spacing = self.grid_rows as f32;
        let offset = self.scroll_offset % spacing;
        let mut k = 0.0;
        loop {
            let y = k * spacing - offset;
            if y >= h as f32 {
                break;
            }
            let yi = y.round();
            if yi >= 0.0 && (yi as usize) < h {
                for (x, cell) in cells[yi as usize].iter_mut().enumerate() {
                    let ch = if x % self.grid_cols as usize == 0 {
                        GRID_X
                    } else {
                        GRID_H
                    };
                    *cell = (ch, color);
                }
            }
            k += 1.0;
        }
    }
}

/// Rasterize one particle into the cell grid. Cells outside the
/// surface are skipped, which keeps drawing safe right after a shrink.
fn draw_shape(cells: &mut [Vec<(char, Color)>], p: &Particle, draw_y: f32, color: Color) {
    let px = p.x.round() as i32;
    let py = draw_y.round() as i32;

    if p.size < 2.0 {
        let ch = match p.shape {
            Shape::Square => SMALL_SQUARE,
            Shape::Circle => SMALL_CIRCLE,
            Shape::Triangle => SMALL_TRIANGLE,
        };
        paint(cells, px, py, ch, color);
        return;
    }

    // Row counts are halved to compensate for the terminal cell aspect.
    match p.shape {
        Shape::Square => {
            let cols = p.size.round() as i32;
            let rows = (p.size / 2.0).round().max(1.0) as i32;
            for dy in 0..rows {
                for dx in 0..cols {
                    paint(cells, px + dx, py + dy, FILL, color);
                }
            }
        }
        Shape::Circle => {
            let r = p.size / 2.0;
            let rows = (r / 2.0).round().max(1.0) as i32;
            let cols = r.round() as i32;
            for dy in -rows..=rows {
                for dx in -cols..=cols {
                    let d = (dx * dx + 4 * dy * dy) as f32;
                    if d <= r * r {
                        paint(cells, px + dx, py + dy, FILL, color);
                    }
                }
            }
        }
        Shape::Triangle => {
            let rows = (p.size / 2.0).round().max(1.0) as i32;
            for dy in 0..=rows {
                let half = (dy as f32 / rows as f32 * p.size).round() as i32;
                for dx in -half..=half {
                    paint(cells, px + dx, py + dy, FILL, color);
                }
            }
        }
    }
}

fn paint(cells: &mut [Vec<(char, Color)>], x: i32, y: i32, ch: char, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if y < cells.len() && x < cells[y].len() {
        cells[y][x] = (ch, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn field(width: u16, height: u16, seed: u64) -> ParticleField {
        let mut rng = SeedRng::from_seed(seed);
        ParticleField::new(width, height, FieldConfig::default(), &mut rng)
    }

    #[test]
    fn init_places_every_particle_inside_the_surface() {
        let field = field(80, 24, 1234);
        assert_eq!(field.len(), 30);
        for p in field.particles() {
            assert!((0.0..80.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..24.0).contains(&p.y), "y out of range: {}", p.y);
            assert!((1.0..4.0).contains(&p.size));
        }
    }

    #[test]
    fn pool_size_is_constant_across_updates() {
        let mut field = field(80, 24, 5);
        for frame in 1..200u64 {
            field.update(frame * 33, AnimationSpeed::Fast);
        }
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn crossing_the_right_edge_flips_x_velocity() {
        let mut field = field(80, 24, 8);
        field.particles[0] = Particle {
            x: 79.9,
            y: 10.0,
            size: 2.0,
            vx: 0.4,
            vy: 0.0,
            shape: Shape::Square,
        };
        field.update(33, AnimationSpeed::Medium);
        assert!(field.particles[0].x > 80.0);
        assert!(field.particles[0].vx < 0.0, "velocity not reflected");
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn crossing_the_top_edge_flips_y_velocity() {
        let mut field = field(80, 24, 8);
        field.particles[0] = Particle {
            x: 40.0,
            y: 0.2,
            size: 2.0,
            vx: 0.0,
            vy: -0.3,
            shape: Shape::Circle,
        };
        field.update(33, AnimationSpeed::Medium);
        assert!(field.particles[0].vy > 0.0);
    }

    #[test]
    fn scroll_offset_is_dampened() {
        let mut field = field(80, 24, 2);
        field.set_scroll(100.0);
        assert!((field.scroll_offset() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn resize_keeps_particle_coordinates() {
        let mut field = field(80, 24, 77);
        let before: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        field.resize(40, 12);
        let after: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn render_after_shrink_stays_in_bounds() {
        let mut field = field(80, 24, 31);
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).expect("terminal");
        // Some stored positions now exceed the 40x12 surface; drawing
        // must clip them rather than panic.
        for frame in 0..5u64 {
            terminal
                .draw(|f| {
                    let area = f.area();
                    field.render(f, area, frame * 33, AnimationSpeed::Medium, ColorTheme::Violet);
                })
                .expect("draw");
        }
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn horizontal_grid_lines_track_scroll() {
        let mut field = field(16, 12, 3);
        field.particles.clear();
        let rendered_rows = |field: &mut ParticleField| -> Vec<u16> {
            let backend = TestBackend::new(16, 12);
            let mut terminal = Terminal::new(backend).expect("terminal");
            terminal
                .draw(|f| {
                    let area = f.area();
                    field.render(f, area, 0, AnimationSpeed::Medium, ColorTheme::Violet);
                })
                .expect("draw");
            let buffer = terminal.backend().buffer().clone();
            (0..12u16)
                .filter(|&y| {
                    buffer
                        .cell((1, y))
                        .is_some_and(|cell| cell.symbol() == GRID_H.to_string())
                })
                .collect()
        };

        let still = rendered_rows(&mut field);
        assert_eq!(still, vec![0, 4, 8]);

        // A scroll of 10 rows dampens to 3 and shifts the lines up.
        field.set_scroll(10.0);
        let scrolled = rendered_rows(&mut field);
        assert_eq!(scrolled, vec![1, 5, 9]);
    }
}
