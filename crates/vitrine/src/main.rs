use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use vitrine_config::Config;
use vitrine_content::{BRAND, TAGLINE, build_logo_art};
use vitrine_core::{AnimationSpeed, ColorTheme, Page, SeedRng};
use vitrine_effects::{FieldConfig, Glitch, GlitchKind, ParticleField, Typewriter};

mod cursor;
mod form;
mod loading;
mod pages;

use cursor::CursorFx;
use form::ContactForm;
use loading::Loading;
use pages::PageView;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load_or_default();
    let capture_mouse = config.ui.cursor_trail;
    let terminal = ratatui::init();
    if capture_mouse {
        let _ = crossterm::execute!(std::io::stdout(), EnableMouseCapture);
    }
    let result = App::new(config).run(terminal);
    if capture_mouse {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the site.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Current accent theme.
    theme: ColorTheme,
    /// Animation pacing from the config.
    speed: AnimationSpeed,
    /// Particle background toggle.
    show_background: bool,
    /// Page currently shown.
    page: Page,
    /// Scroll position of the current page, in rows.
    scroll: f32,
    /// Largest valid scroll position, from the last layout.
    max_scroll: f32,
    /// Monotonic clock origin for all animation state.
    started: Instant,
    rng: SeedRng,
    loading: Option<Loading>,
    typewriter: Typewriter,
    glitch: Glitch,
    field: Option<ParticleField>,
    view: PageView,
    form: ContactForm,
    cursor: CursorFx,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let theme = config.ui.theme;
        let speed = config.background.speed;
        let show_background = config.background.enabled;
        let reduced_motion = config.ui.reduced_motion;

        let mut typewriter = Typewriter::new(BRAND, 0);
        if reduced_motion {
            typewriter.skip();
        }
        let loading = (!config.ui.skip_loading && !reduced_motion).then(Loading::new);

        Self {
            running: false,
            theme,
            speed,
            show_background,
            page: Page::Home,
            scroll: 0.0,
            max_scroll: 0.0,
            started: Instant::now(),
            rng: SeedRng::from_entropy(),
            loading,
            typewriter,
            glitch: Glitch::new(GlitchKind::Random),
            field: None,
            view: PageView::mount(Page::Home, reduced_motion),
            form: ContactForm::new(),
            cursor: CursorFx::new(),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since the app started, driving every animation.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.elapsed_ms();

        if let Some(loading) = &mut self.loading {
            loading.update(now, &mut self.rng);
            if !loading.is_finished(now) {
                loading.render(frame, now, self.theme);
                return;
            }
            self.loading = None;
            // The logo starts typing once the boot screen hands off.
            self.typewriter = Typewriter::new(BRAND, now);
        }

        self.glitch.update(now, &mut self.rng);
        self.cursor.update(now, &mut self.rng);

        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(1), // Navigation
            Constraint::Fill(1),   // Content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Help text
        ])
        .split(area);

        if self.show_background {
            if self.field.is_none() {
                let field_config = FieldConfig {
                    particle_count: self.config.background.particle_count,
                    ..FieldConfig::default()
                };
                self.field = Some(ParticleField::new(
                    area.width,
                    area.height,
                    field_config,
                    &mut self.rng,
                ));
            }
            if let Some(field) = &mut self.field {
                field.set_scroll(self.scroll);
                field.render(frame, area, now, self.speed, self.theme);
            }
        }

        self.render_nav(frame, chunks[0], now);

        let mut body = chunks[1];
        if self.page == Page::Home {
            body = self.render_hero(frame, body, now);
        }
        if self.page == Page::Contact && body.height > 12 {
            let form_height = 7;
            let form_area = Rect {
                x: body.x + 2,
                y: body.y + body.height - form_height,
                width: body.width.saturating_sub(4),
                height: form_height,
            };
            body = Rect {
                height: body.height - form_height,
                ..body
            };
            self.form.render(frame, form_area, self.theme);
        }

        self.max_scroll = (self.view.total_height() - body.height as f32).max(0.0);
        self.scroll = self.scroll.min(self.max_scroll);
        self.view
            .render(frame, body, self.scroll, now, self.speed, self.theme);

        self.render_footer(frame, chunks[2]);
        self.render_help(frame, chunks[3]);

        if self.config.ui.cursor_trail {
            let (_, row) = self.cursor.position();
            self.cursor
                .set_hover(row == chunks[0].y || row == chunks[3].y);
            self.cursor.render(frame, now, self.theme);
        }
    }

    /// Navigation bar: the brand (occasionally glitched) and one entry
    /// per page with its number-key binding.
    fn render_nav(&self, frame: &mut Frame, area: Rect, now: u64) {
        let brand_style = Style::new()
            .fg(self.theme.accent())
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.glitch.apply(BRAND, now, brand_style).spans);
        spans.push(Span::raw("  "));

        for (i, page) in Page::ALL.iter().enumerate() {
            let label = format!(" {}:{} ", i + 1, page.title());
            let style = if *page == self.page {
                Style::new().fg(Color::Black).bg(self.theme.accent())
            } else {
                Style::new().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Landing-page hero: the logo typed out in pixel art over a
    /// prompt line, with the tagline once typing settles.
    fn render_hero(&self, frame: &mut Frame, content: Rect, now: u64) -> Rect {
        if content.height < 16 {
            return content;
        }
        let hero_height = 10u16;

        let typed = self.typewriter.visible(now).to_string();
        let complete = self.typewriter.is_complete(now);

        let mut lines: Vec<Line> = build_logo_art(&typed)
            .into_iter()
            .map(|row| Line::from(row).style(Style::new().fg(self.theme.accent())))
            .collect();

        let mut prompt = vec![
            Span::styled("> ", Style::new().fg(Color::DarkGray)),
            Span::styled(typed, Style::new().fg(Color::White)),
        ];
        if !complete {
            prompt.push(Span::styled("█", Style::new().fg(self.theme.accent())));
        }
        lines.push(Line::default());
        lines.push(Line::from(prompt));
        lines.push(if complete {
            Line::from(Span::styled(TAGLINE, Style::new().fg(Color::Gray)))
        } else {
            Line::default()
        });

        let hero = Rect {
            height: hero_height,
            ..content
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), hero);

        Rect {
            y: content.y + hero_height,
            height: content.height - hero_height,
            ..content
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let year = chrono::Local::now().year();
        let footer = Paragraph::new(format!("© {year} NEOBYTE AI · built where the network ends"))
            .style(Style::new().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let accent = self.theme.accent();
        let mut spans = vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "tab".bold().fg(accent),
            " page  ".dark_gray(),
            "↑↓".bold().fg(accent),
            " scroll  ".dark_gray(),
            "b".bold().fg(accent),
            " background  ".dark_gray(),
            "c".bold().fg(accent),
            " theme".dark_gray(),
        ];
        if self.page == Page::Contact {
            spans.push("  e".bold().fg(accent));
            spans.push(" edit form".dark_gray());
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so animations stay smooth.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        // While the contact form is in edit mode it owns the keyboard,
        // except for the emergency exit.
        if self.page == Page::Contact && self.form.is_editing() {
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
                (_, code) => {
                    self.form.on_key(code);
                }
            }
            return;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab) => self.switch_page(self.page.next()),
            (_, KeyCode::BackTab) => self.switch_page(self.page.prev()),
            (_, KeyCode::Char(digit @ '1'..='9')) => {
                if let Some(page) = Page::from_digit(digit) {
                    self.switch_page(page);
                }
            }
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-1.0),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(1.0),
            (_, KeyCode::PageUp) => self.scroll_by(-8.0),
            (_, KeyCode::PageDown) => self.scroll_by(8.0),
            (_, KeyCode::Home) => self.scroll = 0.0,
            (_, KeyCode::End) => self.scroll = self.max_scroll,
            (_, KeyCode::Char('b')) => self.show_background = !self.show_background,
            (_, KeyCode::Char('c')) => self.theme = self.theme.next(),
            (_, KeyCode::Char('e')) if self.page == Page::Contact => self.form.begin_editing(),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let now = self.elapsed_ms();
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor
                    .on_move(mouse.column, mouse.row, now, &mut self.rng);
            }
            MouseEventKind::Down(MouseButton::Left) => self.cursor.on_down(now),
            MouseEventKind::Up(MouseButton::Left) => self.cursor.on_up(),
            MouseEventKind::ScrollUp => self.scroll_by(-2.0),
            MouseEventKind::ScrollDown => self.scroll_by(2.0),
            _ => {}
        }
    }

    /// Switch to another page: tear down the old reveals, reset scroll
    /// and mount the new sections.
    fn switch_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.view.unmount();
        self.page = page;
        self.scroll = 0.0;
        self.view = PageView::mount(page, self.config.ui.reduced_motion);

        // Returning to the landing page replays the logo animation.
        if page == Page::Home {
            self.typewriter = Typewriter::new(BRAND, self.elapsed_ms());
            if self.config.ui.reduced_motion {
                self.typewriter.skip();
            }
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
