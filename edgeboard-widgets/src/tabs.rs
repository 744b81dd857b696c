//! Tab strip over a set of titled panels.
//!
//! The component renders only the strip; the caller renders the active
//! panel's content underneath, keyed off [`TabsState::selected`].

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{StatefulWidget, Tabs, Widget};

use crate::text::display_width;
use crate::theme::Theme;

/// Index of the selected tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabsState {
    selected: usize,
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabsOutcome {
    Selected(usize),
}

/// The tab strip widget.
#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    titles: &'a [&'a str],
    theme: Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(titles: &'a [&'a str]) -> Self {
        Self {
            titles,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Left/Right move the selection, clamped to the title count.
    pub fn handle_key(&self, key: KeyEvent, state: &mut TabsState) -> Option<TabsOutcome> {
        if self.titles.is_empty() {
            return None;
        }
        let last = self.titles.len() - 1;
        let target = match key.code {
            KeyCode::Left => state.selected.saturating_sub(1),
            KeyCode::Right => (state.selected + 1).min(last),
            _ => return None,
        };
        if target != state.selected {
            state.selected = target;
            return Some(TabsOutcome::Selected(target));
        }
        None
    }

    /// Select the tab whose title was clicked.
    ///
    /// Mirrors the strip layout rendered by the toolkit: each title padded
    /// with one space either side, titles separated by a one-column divider.
    pub fn handle_mouse(
        &self,
        mouse: MouseEvent,
        area: Rect,
        state: &mut TabsState,
    ) -> Option<TabsOutcome> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || !area.contains(Position::new(mouse.column, mouse.row))
        {
            return None;
        }

        let mut x = area.x;
        for (idx, title) in self.titles.iter().enumerate() {
            let span = 1 + display_width(title) as u16 + 1;
            if mouse.column >= x && mouse.column < x + span {
                if idx != state.selected {
                    state.selected = idx;
                    return Some(TabsOutcome::Selected(idx));
                }
                return None;
            }
            x += span + 1;
        }
        None
    }
}

impl StatefulWidget for TabBar<'_> {
    type State = TabsState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TabsState) {
        if self.titles.is_empty() {
            return;
        }
        state.selected = state.selected.min(self.titles.len() - 1);

        let tabs = Tabs::new(self.titles.iter().map(|t| t.to_string()))
            .select(state.selected)
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        Widget::render(tabs, area, buf);
    }
}
