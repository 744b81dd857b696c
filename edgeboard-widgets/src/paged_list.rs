//! Filterable, paginated record table.
//!
//! The core dashboard component: given caller-owned records and a set of
//! searchable fields, produces a filtered, paginated view plus the controls
//! to navigate it (filter box, pager). Filtering is a case-insensitive
//! substring match OR'd across the filter fields, recomputed on every
//! keystroke; pagination slices the filtered set.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row, StatefulWidget, Table, Widget};

use crate::input::{InputOutcome, InputState};
use crate::record::Record;
use crate::spinner::Skeleton;
use crate::text::truncate_to_width;
use crate::theme::Theme;

/// Default page-size choices, matching the pager's dropdown in the web UI.
pub const DEFAULT_PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25];

const ACTION_COL_WIDTH: u16 = 3;
const ACTION_GLYPH: &str = "⋮";

/// Which part of the list keystrokes are driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagedListFocus {
    /// Keys edit the filter box.
    Filter,
    /// Keys navigate rows and pages.
    #[default]
    Table,
}

/// One table column: header text plus the record field it displays.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub header: &'a str,
    pub field: &'a str,
}

impl<'a> Column<'a> {
    pub fn new(header: &'a str, field: &'a str) -> Self {
        Self { header, field }
    }
}

/// Local state of a [`FilterablePagedList`].
///
/// Created at defaults on mount, mutated only by the event handlers, and
/// discarded with the screen. The filter text is always stored lowercase.
#[derive(Debug)]
pub struct PagedListState {
    filter: InputState,
    page: usize,
    page_size: usize,
    cursor: usize,
    focus: PagedListFocus,
}

impl Default for PagedListState {
    fn default() -> Self {
        Self {
            filter: InputState::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            cursor: 0,
            focus: PagedListFocus::default(),
        }
    }
}

impl PagedListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter string (always lowercase).
    pub fn filter(&self) -> &str {
        self.filter.text()
    }

    /// Replace the filter text. Lowercases the value and resets to page 0.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter.set(filter.into().to_lowercase());
        self.page = 0;
        self.cursor = 0;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Select a new page size and reset to page 0.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
        self.cursor = 0;
    }

    pub fn focus(&self) -> PagedListFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: PagedListFocus) {
        self.focus = focus;
    }

    /// Selected row index within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Keep `page * page_size` from pointing past the filtered set.
    fn clamp(&mut self, filtered_len: usize) {
        let pages = page_count(filtered_len, self.page_size());
        self.page = self.page.min(pages.saturating_sub(1));
        let (start, end) = page_bounds(filtered_len, self.page, self.page_size());
        self.cursor = self.cursor.min((end - start).saturating_sub(1));
    }

    /// Lowercase the filter buffer in place after an edit, exactly as the
    /// source does on input (no diacritic folding).
    fn normalize_filter(&mut self) {
        let lowered = self.filter.text().to_lowercase();
        if lowered != self.filter.text() {
            let cursor = self.filter.cursor().min(lowered.chars().count());
            self.filter.set(lowered);
            // set() moved the cursor to the end; walk it back.
            for _ in cursor..self.filter.cursor() {
                let _ = self
                    .filter
                    .handle_key(KeyEvent::from(KeyCode::Left));
            }
        }
        self.page = 0;
        self.cursor = 0;
    }
}

/// Event emitted by the list for the caller to act on.
///
/// `RowAction` carries the activated record; the component never interprets
/// the action itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagedListOutcome<'r> {
    FilterChanged,
    PageChanged(usize),
    PageSizeChanged(usize),
    RowAction(&'r Record),
}

/// The filterable paged table widget. Rebuilt from props each frame.
#[derive(Debug, Clone)]
pub struct FilterablePagedList<'a> {
    records: &'a [Record],
    loading: bool,
    filter_fields: &'a [&'a str],
    columns: &'a [Column<'a>],
    page_size_options: &'a [usize],
    theme: Theme,
}

impl<'a> FilterablePagedList<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            loading: false,
            filter_fields: &[],
            columns: &[],
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS,
            theme: Theme::default(),
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Fields searched by the filter box.
    pub fn filter_fields(mut self, fields: &'a [&'a str]) -> Self {
        self.filter_fields = fields;
        self
    }

    pub fn columns(mut self, columns: &'a [Column<'a>]) -> Self {
        self.columns = columns;
        self
    }

    pub fn page_size_options(mut self, options: &'a [usize]) -> Self {
        if !options.is_empty() {
            self.page_size_options = options;
        }
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The records matching the active filter, in original order.
    ///
    /// A record matches iff the filter is empty or at least one filter
    /// field's stringified, lowercased value contains the filter as a
    /// substring. While loading, filtering is skipped and the set is empty.
    pub fn filtered(&self, state: &PagedListState) -> Vec<&'a Record> {
        if self.loading {
            return Vec::new();
        }
        let needle = state.filter();
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| {
                self.filter_fields.iter().any(|field| {
                    record.display_string(field).to_lowercase().contains(needle)
                })
            })
            .collect()
    }

    /// Handle a key press, updating `state` and emitting an outcome for the
    /// caller when something it owns happened.
    pub fn handle_key(
        &self,
        key: KeyEvent,
        state: &mut PagedListState,
    ) -> Option<PagedListOutcome<'a>> {
        match state.focus {
            PagedListFocus::Filter => self.handle_filter_key(key, state),
            PagedListFocus::Table => self.handle_table_key(key, state),
        }
    }

    fn handle_filter_key(
        &self,
        key: KeyEvent,
        state: &mut PagedListState,
    ) -> Option<PagedListOutcome<'a>> {
        match key.code {
            // The clear control: empty the filter and leave the box.
            KeyCode::Esc => {
                let had_filter = !state.filter.is_empty();
                state.filter.clear();
                state.page = 0;
                state.cursor = 0;
                state.focus = PagedListFocus::Table;
                had_filter.then_some(PagedListOutcome::FilterChanged)
            }
            KeyCode::Tab => {
                state.focus = PagedListFocus::Table;
                None
            }
            _ => match state.filter.handle_key(key) {
                InputOutcome::Changed => {
                    state.normalize_filter();
                    Some(PagedListOutcome::FilterChanged)
                }
                InputOutcome::Submitted => {
                    state.focus = PagedListFocus::Table;
                    None
                }
                InputOutcome::Handled | InputOutcome::Ignored => None,
            },
        }
    }

    fn handle_table_key(
        &self,
        key: KeyEvent,
        state: &mut PagedListState,
    ) -> Option<PagedListOutcome<'a>> {
        let filtered = self.filtered(state);
        state.clamp(filtered.len());
        let (start, end) = page_bounds(filtered.len(), state.page, state.page_size());
        let visible = end - start;
        let pages = page_count(filtered.len(), state.page_size());

        match key.code {
            KeyCode::Char('/') => {
                state.focus = PagedListFocus::Filter;
                None
            }

            KeyCode::Down => {
                if visible > 0 {
                    state.cursor = (state.cursor + 1).min(visible - 1);
                }
                None
            }

            KeyCode::Up => {
                state.cursor = state.cursor.saturating_sub(1);
                None
            }

            KeyCode::Left => {
                if state.page > 0 {
                    state.page -= 1;
                    state.cursor = 0;
                    return Some(PagedListOutcome::PageChanged(state.page));
                }
                None
            }

            KeyCode::Right => {
                if state.page + 1 < pages {
                    state.page += 1;
                    state.cursor = 0;
                    return Some(PagedListOutcome::PageChanged(state.page));
                }
                None
            }

            KeyCode::Home => {
                if state.page != 0 {
                    state.page = 0;
                    state.cursor = 0;
                    return Some(PagedListOutcome::PageChanged(0));
                }
                None
            }

            KeyCode::End => {
                let last = pages.saturating_sub(1);
                if state.page != last {
                    state.page = last;
                    state.cursor = 0;
                    return Some(PagedListOutcome::PageChanged(last));
                }
                None
            }

            // Cycle through the page-size options.
            KeyCode::Char('s') => {
                let current = self
                    .page_size_options
                    .iter()
                    .position(|&s| s == state.page_size());
                let next_idx = match current {
                    Some(idx) => (idx + 1) % self.page_size_options.len(),
                    None => 0,
                };
                let next = self.page_size_options[next_idx];
                state.set_page_size(next);
                debug!("page size changed to {next}");
                Some(PagedListOutcome::PageSizeChanged(next))
            }

            KeyCode::Enter | KeyCode::Char('m') => {
                filtered
                    .get(start + state.cursor)
                    .copied()
                    .map(PagedListOutcome::RowAction)
            }

            _ => None,
        }
    }

    /// Handle a mouse event. `area` must be the rect the widget was last
    /// rendered into.
    pub fn handle_mouse(
        &self,
        mouse: MouseEvent,
        area: Rect,
        state: &mut PagedListState,
    ) -> Option<PagedListOutcome<'a>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let pos = Position::new(mouse.column, mouse.row);
        if !area.contains(pos) {
            return None;
        }

        let [filter_area, table_area, pager_area] = layout(area);

        if filter_area.contains(pos) {
            state.focus = PagedListFocus::Filter;
            return None;
        }

        if pager_area.contains(pos) {
            // Prev/next buttons sit at fixed offsets from the right edge.
            let prev_x = pager_area.right().saturating_sub(4);
            let next_x = pager_area.right().saturating_sub(2);
            let key = if mouse.column == prev_x {
                KeyCode::Left
            } else if mouse.column == next_x {
                KeyCode::Right
            } else {
                return None;
            };
            state.focus = PagedListFocus::Table;
            return self.handle_table_key(KeyEvent::from(key), state);
        }

        if table_area.contains(pos) && mouse.row > table_area.y {
            let filtered = self.filtered(state);
            state.clamp(filtered.len());
            let (start, end) = page_bounds(filtered.len(), state.page, state.page_size());
            let row_idx = (mouse.row - table_area.y - 1) as usize;
            if row_idx < end - start {
                state.focus = PagedListFocus::Table;
                state.cursor = row_idx;
                // A click on the trailing action cell triggers the row action.
                if mouse.column >= table_area.right().saturating_sub(ACTION_COL_WIDTH) {
                    return filtered
                        .get(start + row_idx)
                        .copied()
                        .map(PagedListOutcome::RowAction);
                }
            }
        }

        None
    }

    fn render_filter_line(&self, area: Rect, buf: &mut Buffer, state: &PagedListState) {
        let focused = state.focus == PagedListFocus::Filter;
        let label_style = if focused {
            Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };

        let mut spans = vec![Span::styled(" Filter ", label_style)];
        if focused {
            let cursor = state.filter.cursor();
            let text = state.filter.text();
            let split = text
                .char_indices()
                .nth(cursor)
                .map(|(i, _)| i)
                .unwrap_or(text.len());
            spans.push(Span::raw(text[..split].to_string()));
            spans.push(Span::styled(
                "█",
                Style::default().fg(self.theme.accent),
            ));
            spans.push(Span::raw(text[split..].to_string()));
            spans.push(Span::styled(
                "  Esc clears",
                Style::default().fg(self.theme.muted),
            ));
        } else if state.filter.is_empty() {
            spans.push(Span::styled(
                "/ to search",
                Style::default().fg(self.theme.muted),
            ));
        } else {
            spans.push(Span::raw(state.filter.text().to_string()));
        }

        Widget::render(Line::from(spans), area, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer, state: &PagedListState) {
        let column_count = self.columns.len().max(1);
        let data_width = area.width.saturating_sub(ACTION_COL_WIDTH);
        let col_width = (data_width / column_count as u16).max(1);

        let header = Row::new(
            self.columns
                .iter()
                .map(|c| Cell::from(c.header))
                .chain(std::iter::once(Cell::from(""))),
        )
        .style(Style::default().add_modifier(Modifier::BOLD).fg(self.theme.text));

        let rows: Vec<Row> = if self.loading {
            let skeleton = Skeleton::new(col_width.saturating_sub(1));
            (0..state.page_size())
                .map(|_| {
                    Row::new(
                        (0..column_count)
                            .map(|_| Cell::from(skeleton.line(&self.theme)))
                            .chain(std::iter::once(Cell::from(""))),
                    )
                })
                .collect()
        } else {
            let filtered = self.filtered(state);
            let (start, end) = page_bounds(filtered.len(), state.page, state.page_size());
            filtered[start..end]
                .iter()
                .enumerate()
                .map(|(idx, record)| {
                    let selected =
                        state.focus == PagedListFocus::Table && idx == state.cursor;
                    let style = if selected {
                        Style::default()
                            .bg(self.theme.highlight_bg)
                            .fg(self.theme.highlight_fg)
                    } else {
                        Style::default()
                    };
                    Row::new(
                        self.columns
                            .iter()
                            .map(|col| {
                                Cell::from(truncate_to_width(
                                    &record.display_string(col.field),
                                    col_width.saturating_sub(1) as usize,
                                ))
                            })
                            .chain(std::iter::once(Cell::from(ACTION_GLYPH))),
                    )
                    .style(style)
                })
                .collect()
        };

        let mut widths: Vec<Constraint> = self
            .columns
            .iter()
            .map(|_| Constraint::Length(col_width))
            .collect();
        widths.push(Constraint::Length(ACTION_COL_WIDTH));

        Widget::render(
            Table::new(rows, widths).header(header).column_spacing(0),
            area,
            buf,
        );
    }

    fn render_pager(&self, area: Rect, buf: &mut Buffer, state: &PagedListState, total: usize) {
        let (start, end) = page_bounds(total, state.page, state.page_size());
        let range = if total == 0 {
            "0–0 of 0".to_string()
        } else {
            format!("{}–{} of {}", start + 1, end, total)
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} per page [s] ", state.page_size()),
                Style::default().fg(self.theme.muted),
            ),
            Span::raw(range),
            Span::styled(" ◂ ▸ ", Style::default().fg(self.theme.accent)),
        ])
        .right_aligned();
        Widget::render(line, area, buf);
    }
}

impl StatefulWidget for FilterablePagedList<'_> {
    type State = PagedListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut PagedListState) {
        let total = self.filtered(state).len();
        state.clamp(total);

        let [filter_area, table_area, pager_area] = layout(area);
        self.render_filter_line(filter_area, buf, state);
        self.render_table(table_area, buf, state);
        self.render_pager(pager_area, buf, state, total);
    }
}

fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Number of pages needed for `total` items at `page_size` per page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The `[start, end)` slice bounds for a page, clamped to `total` so an
/// out-of-range page yields a short or empty slice instead of a panic.
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}
