//! Toast/alert banner stack.
//!
//! Alert lifetime is caller-owned: the stack only stores what it is given
//! and removes an alert when its close control fires. An empty stack renders
//! nothing.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::text::truncate_to_width;
use crate::theme::Theme;

const CLOSE_GLYPH: &str = "✕";

/// Alert severity. Maps to a glyph and theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl AlertVariant {
    pub fn glyph(self) -> &'static str {
        match self {
            AlertVariant::Success => "✔",
            AlertVariant::Warning => "⚠",
            AlertVariant::Error => "✖",
            AlertVariant::Info => "ℹ",
        }
    }

    pub fn color(self, theme: &Theme) -> Color {
        match self {
            AlertVariant::Success => theme.success,
            AlertVariant::Warning => theme.warning,
            AlertVariant::Error => theme.error,
            AlertVariant::Info => theme.info,
        }
    }
}

/// One banner in the stack.
#[derive(Debug, Clone)]
pub struct Alert {
    id: u64,
    variant: AlertVariant,
    message: String,
}

impl Alert {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn variant(&self) -> AlertVariant {
        self.variant
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    Dismissed(u64),
}

/// Ordered collection of live alerts, oldest first.
#[derive(Debug, Default)]
pub struct AlertStack {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an alert and return its id.
    pub fn push(&mut self, variant: AlertVariant, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            variant,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(AlertVariant::Success, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(AlertVariant::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(AlertVariant::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(AlertVariant::Info, message)
    }

    /// Remove the alert with the given id. Returns true if it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        let removed = self.alerts.len() != before;
        if removed {
            debug!("alert {id} dismissed");
        }
        removed
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// `x` dismisses the newest alert.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AlertOutcome> {
        if key.code == KeyCode::Char('x') {
            let id = self.alerts.last()?.id;
            self.dismiss(id);
            return Some(AlertOutcome::Dismissed(id));
        }
        None
    }

    /// A click on a banner's close cell dismisses that banner. `area` must
    /// be the rect the banners were last rendered into.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Option<AlertOutcome> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || !area.contains(Position::new(mouse.column, mouse.row))
        {
            return None;
        }
        // Close cell is the second-to-last column of each banner line.
        if mouse.column != area.right().saturating_sub(2) {
            return None;
        }
        let row_idx = (mouse.row - area.y) as usize;
        let id = self.alerts.get(row_idx)?.id;
        self.dismiss(id);
        Some(AlertOutcome::Dismissed(id))
    }
}

/// Renders an [`AlertStack`] as a column of one-line banners, oldest at the
/// top. Render nothing when the stack is empty.
#[derive(Debug, Clone)]
pub struct AlertBanners<'a> {
    stack: &'a AlertStack,
    theme: Theme,
}

impl<'a> AlertBanners<'a> {
    pub fn new(stack: &'a AlertStack) -> Self {
        Self {
            stack,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Height in rows needed to show every banner.
    pub fn height(&self) -> u16 {
        self.stack.len() as u16
    }
}

impl Widget for AlertBanners<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.stack.is_empty() {
            return;
        }

        for (idx, alert) in self.stack.alerts().iter().enumerate() {
            if idx as u16 >= area.height {
                break;
            }
            let row = Rect {
                y: area.y + idx as u16,
                height: 1,
                ..area
            };
            let style = Style::default()
                .bg(alert.variant().color(&self.theme))
                .fg(self.theme.highlight_fg);

            // "{glyph} message … ✕ " with message clipped to the banner width.
            let budget = (row.width as usize).saturating_sub(7);
            let message = truncate_to_width(alert.message(), budget);
            let pad = (row.width as usize)
                .saturating_sub(3 + crate::text::display_width(&message) + 3);
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", alert.variant().glyph()),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(message, style),
                Span::styled(" ".repeat(pad), style),
                Span::styled(format!(" {CLOSE_GLYPH} "), style.add_modifier(Modifier::BOLD)),
            ]);
            Widget::render(line, row, buf);
        }
    }
}
