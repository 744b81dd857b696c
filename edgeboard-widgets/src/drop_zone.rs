//! Drop target for an in-app mouse drag.
//!
//! The terminal has no native file drag, so the application is the drag
//! source: dragging the mouse over the zone sets the hover flag, releasing
//! inside it drops. The zone is purely presentational; what "dropping" means
//! is entirely the caller's business.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget};

use crate::spinner::Spinner;
use crate::theme::Theme;

/// Hover flag of a [`DropZone`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZoneState {
    hovered: bool,
}

impl DropZoneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
}

/// The drop-zone widget. Rebuilt from props each frame.
#[derive(Debug, Clone)]
pub struct DropZone<'a> {
    label: &'a str,
    accepts: bool,
    loading: bool,
    tick: usize,
    theme: Theme,
}

impl<'a> DropZone<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            accepts: true,
            loading: false,
            tick: 0,
            theme: Theme::default(),
        }
    }

    /// Whether the zone can currently take a drop.
    pub fn accepts(mut self, accepts: bool) -> Self {
        self.accepts = accepts;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Animation tick for the loading spinner.
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Track the drag and emit [`DropOutcome::Dropped`] on a release inside
    /// the zone. `area` must be the rect the zone was last rendered into.
    pub fn handle_mouse(
        &self,
        mouse: MouseEvent,
        area: Rect,
        state: &mut DropZoneState,
    ) -> Option<DropOutcome> {
        let inside = area.contains(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) => {
                state.hovered = inside;
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let was_hovered = state.hovered;
                state.hovered = false;
                if was_hovered && inside && self.accepts && !self.loading {
                    debug!("drop accepted");
                    return Some(DropOutcome::Dropped);
                }
                None
            }
            MouseEventKind::Moved => {
                // A plain move means no drag is in flight.
                state.hovered = false;
                None
            }
            _ => None,
        }
    }
}

impl StatefulWidget for DropZone<'_> {
    type State = DropZoneState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DropZoneState) {
        let active = state.hovered && self.accepts && !self.loading;

        let border_style = if active {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let content: Line = if self.loading {
            Spinner::new().line(self.tick, &self.theme)
        } else if active {
            Line::styled(
                "Release to drop",
                Style::default()
                    .fg(self.theme.highlight_fg)
                    .bg(self.theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(self.label.to_string(), Style::default().fg(self.theme.muted))
        };

        let inner_height = block.inner(area).height;
        let top_pad = inner_height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); top_pad as usize];
        lines.push(content);

        Widget::render(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
            buf,
        );
    }
}
