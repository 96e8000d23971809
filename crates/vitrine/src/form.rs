//! Contact form: plain data in, plain data out.
//!
//! Three text fields with presence validation and a minimal structural
//! email check. Nothing is sent anywhere; a successful submit just
//! parks a confirmation in the status line.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vitrine_core::ColorTheme;

const FIELD_LABELS: [&str; 3] = ["NAME    ", "EMAIL   ", "MESSAGE "];

/// Outcome parked in the status line after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Sent,
    Errors(Vec<&'static str>),
}

/// Contact form state.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    focus: usize,
    editing: bool,
    status: Option<FormStatus>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether keys are currently routed to the form.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode, focusing the first field.
    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.message,
        }
    }

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            _ => &self.message,
        }
    }

    /// Handle a key while editing. Returns false when the key ends the
    /// edit session.
    pub fn on_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                return false;
            }
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % FIELD_LABELS.len();
            }
            KeyCode::BackTab => {
                self.focus = (self.focus + FIELD_LABELS.len() - 1) % FIELD_LABELS.len();
            }
            KeyCode::Enter => {
                if self.focus + 1 < FIELD_LABELS.len() {
                    self.focus += 1;
                } else {
                    self.submit();
                    return self.editing;
                }
            }
            KeyCode::Backspace => {
                let focus = self.focus;
                self.field_mut(focus).pop();
            }
            KeyCode::Char(c) => {
                let focus = self.focus;
                self.field_mut(focus).push(c);
            }
            _ => {}
        }
        true
    }

    /// Validate the fields: presence on all three, structure on the
    /// email address.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("name is required");
        }
        if self.email.trim().is_empty() {
            errors.push("email is required");
        } else if !email_looks_valid(self.email.trim()) {
            errors.push("email looks invalid");
        }
        if self.message.trim().is_empty() {
            errors.push("message is required");
        }
        errors
    }

    /// Validate and park the outcome in the status line. A clean
    /// submit ends the edit session.
    pub fn submit(&mut self) {
        let errors = self.validate();
        if errors.is_empty() {
            self.status = Some(FormStatus::Sent);
            self.editing = false;
        } else {
            self.status = Some(FormStatus::Errors(errors));
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: ColorTheme) {
        if area.height < 2 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            "── CONTACT FORM ──",
            Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD),
        )));

        for (i, label) in FIELD_LABELS.iter().enumerate() {
            let focused = self.editing && self.focus == i;
            let marker = if focused { "█" } else { "" };
            let label_style = if focused {
                Style::new().fg(theme.accent())
            } else {
                Style::new().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{label}> "), label_style),
                Span::styled(
                    format!("{}{marker}", self.field(i)),
                    Style::new().fg(Color::White),
                ),
            ]));
        }

        match &self.status {
            Some(FormStatus::Sent) => lines.push(Line::from(Span::styled(
                "Message queued. We'll be in touch.",
                Style::new().fg(theme.accent()),
            ))),
            Some(FormStatus::Errors(errors)) => lines.push(Line::from(Span::styled(
                errors.join(", "),
                Style::new().fg(Color::Red),
            ))),
            None => lines.push(Line::default()),
        }

        let hint = if self.editing {
            "Tab next field   Enter send   Esc done"
        } else {
            "press e to edit the form"
        };
        lines.push(Line::from(Span::styled(hint, Style::new().fg(Color::DarkGray))));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn email_looks_valid(email: &str) -> bool {
    let Some((user, domain)) = email.split_once('@') else {
        return false;
    };
    !user.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}
