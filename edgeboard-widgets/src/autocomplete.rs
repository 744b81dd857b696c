//! Autocomplete input with a suggestion dropdown.
//!
//! Suggestions are kept when their label starts with the trimmed, lowercased
//! input, capped at `max_suggestions`. An empty input with the menu open
//! shows the full (capped) list so focusing the field reveals the choices.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

use crate::input::{InputOutcome, InputState};
use crate::text::truncate_to_width;
use crate::theme::Theme;

const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Input text, menu visibility and highlight of an [`Autocomplete`].
#[derive(Debug, Default)]
pub struct AutocompleteState {
    input: InputState,
    open: bool,
    highlighted: Option<usize>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.text()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input.set(value);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the menu, as focusing the field does.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteOutcome {
    /// The input text changed.
    Changed,
    /// The input was emptied, clearing any selection.
    Cleared,
    /// A suggestion was picked.
    Selected(String),
}

/// The autocomplete widget. Rebuilt from props each frame.
#[derive(Debug, Clone)]
pub struct Autocomplete<'a> {
    suggestions: &'a [String],
    max_suggestions: usize,
    label: &'a str,
    placeholder: &'a str,
    theme: Theme,
}

impl<'a> Autocomplete<'a> {
    pub fn new(suggestions: &'a [String]) -> Self {
        Self {
            suggestions,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            label: "",
            placeholder: "",
            theme: Theme::default(),
        }
    }

    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max.max(1);
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Suggestions matching `value`, capped at `max_suggestions`.
    ///
    /// With `show_empty`, an empty value yields the (capped) full list
    /// instead of nothing.
    pub fn matches(&self, value: &str, show_empty: bool) -> Vec<&'a str> {
        let needle = value.trim().to_lowercase();
        if needle.is_empty() && !show_empty {
            return Vec::new();
        }
        self.suggestions
            .iter()
            .filter(|s| s.to_lowercase().starts_with(&needle))
            .take(self.max_suggestions)
            .map(String::as_str)
            .collect()
    }

    pub fn handle_key(
        &self,
        key: KeyEvent,
        state: &mut AutocompleteState,
    ) -> Option<AutocompleteOutcome> {
        let menu = self.matches(state.value(), true);

        match key.code {
            KeyCode::Esc => {
                state.close();
                None
            }

            KeyCode::Down if state.open && !menu.is_empty() => {
                state.highlighted = Some(match state.highlighted {
                    Some(i) => (i + 1) % menu.len(),
                    None => 0,
                });
                None
            }

            KeyCode::Up if state.open && !menu.is_empty() => {
                state.highlighted = Some(match state.highlighted {
                    Some(0) | None => menu.len() - 1,
                    Some(i) => i - 1,
                });
                None
            }

            KeyCode::Enter if state.open => {
                let picked = state.highlighted.and_then(|i| menu.get(i).copied())?;
                let picked = picked.to_string();
                state.input.set(picked.clone());
                state.close();
                Some(AutocompleteOutcome::Selected(picked))
            }

            _ => match state.input.handle_key(key) {
                InputOutcome::Changed => {
                    state.open = true;
                    state.highlighted = None;
                    if state.input.is_empty() {
                        Some(AutocompleteOutcome::Cleared)
                    } else {
                        Some(AutocompleteOutcome::Changed)
                    }
                }
                _ => None,
            },
        }
    }
}

impl StatefulWidget for Autocomplete<'_> {
    type State = AutocompleteState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut AutocompleteState) {
        if area.height == 0 {
            return;
        }

        // Input line.
        let input_area = Rect { height: 1, ..area };
        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(
                format!(" {} ", self.label),
                Style::default()
                    .fg(if state.open { self.theme.accent } else { self.theme.muted })
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if state.value().is_empty() && !state.open {
            spans.push(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(self.theme.muted),
            ));
        } else {
            spans.push(Span::raw(state.value().to_string()));
            if state.open {
                spans.push(Span::styled("█", Style::default().fg(self.theme.accent)));
            }
        }
        Widget::render(Line::from(spans), input_area, buf);

        if !state.open {
            return;
        }

        // Dropdown under the input.
        let menu = self.matches(state.value(), true);
        if let Some(h) = state.highlighted {
            if h >= menu.len() {
                state.highlighted = if menu.is_empty() { None } else { Some(menu.len() - 1) };
            }
        }
        for (idx, suggestion) in menu.iter().enumerate() {
            let y = area.y + 1 + idx as u16;
            if y >= area.bottom() {
                break;
            }
            let row = Rect { y, height: 1, ..area };
            let style = if state.highlighted == Some(idx) {
                Style::default()
                    .bg(self.theme.highlight_bg)
                    .fg(self.theme.highlight_fg)
            } else {
                Style::default().fg(self.theme.text)
            };
            let label = truncate_to_width(suggestion, (row.width as usize).saturating_sub(3));
            Widget::render(
                Line::from(Span::styled(format!("  {label}"), style)),
                row,
                buf,
            );
        }
    }
}
