//! Application state and event dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{debug, info};
use ratatui::layout::Rect;

use edgeboard_widgets::{
    AlertStack, Autocomplete, AutocompleteOutcome, AutocompleteState, Column, DropOutcome,
    DropZone, DropZoneState, FilterablePagedList, PagedListFocus, PagedListOutcome,
    PagedListState, Record, TabBar, TabsState,
};

pub const TAB_TITLES: &[&str] = &["Applications", "Agents"];
pub const FILTER_FIELDS: &[&str] = &["name", "description"];
pub const COLUMNS: &[Column<'static>] = &[
    Column {
        header: "Name",
        field: "name",
    },
    Column {
        header: "Description",
        field: "description",
    },
    Column {
        header: "Microservices",
        field: "microservices",
    },
    Column {
        header: "Variables",
        field: "variables",
    },
];
pub const DROP_LABEL: &str = "Drag an agent config here with the mouse";

/// Initial ticks the catalog pretends to be loading for.
const LOADING_TICKS: u8 = 8;
/// Ticks a simulated deploy takes after a drop.
const DEPLOY_TICKS: u8 = 15;

/// Which region keystrokes are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Tabs,
    Content,
}

impl Pane {
    pub fn toggle(self) -> Self {
        match self {
            Pane::Tabs => Pane::Content,
            Pane::Content => Pane::Tabs,
        }
    }
}

/// Rects the widgets were last rendered into, for mouse dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Areas {
    pub tabs: Rect,
    pub content: Rect,
    pub autocomplete: Rect,
    pub drop_zone: Rect,
    pub alerts: Rect,
}

/// Main application state.
pub struct App {
    pub records: Vec<Record>,
    pub agent_names: Vec<String>,
    pub loading: bool,
    pub tick: usize,
    pub should_quit: bool,
    pub focused_pane: Pane,
    pub tabs: TabsState,
    pub list: PagedListState,
    pub autocomplete: AutocompleteState,
    pub drop_zone: DropZoneState,
    pub alerts: AlertStack,
    pub areas: Areas,
    loading_ticks: u8,
    deploying: Option<u8>,
}

impl App {
    pub fn new(records: Vec<Record>, agent_names: Vec<String>) -> Self {
        Self {
            records,
            agent_names,
            loading: true,
            tick: 0,
            should_quit: false,
            focused_pane: Pane::Content,
            tabs: TabsState::new(),
            list: PagedListState::new(),
            autocomplete: AutocompleteState::new(),
            drop_zone: DropZoneState::new(),
            alerts: AlertStack::new(),
            areas: Areas::default(),
            loading_ticks: LOADING_TICKS,
            deploying: None,
        }
    }

    pub fn deploying(&self) -> bool {
        self.deploying.is_some()
    }

    /// Advance animations and simulated background work.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.loading {
            self.loading_ticks = self.loading_ticks.saturating_sub(1);
            if self.loading_ticks == 0 {
                self.loading = false;
                info!("catalog ready, {} records", self.records.len());
            }
        }

        if let Some(remaining) = self.deploying {
            if remaining == 0 {
                self.deploying = None;
                self.alerts.success("Agent configuration deployed");
            } else {
                self.deploying = Some(remaining - 1);
            }
        }
    }

    /// True while a widget owns the keyboard for text entry.
    fn editing(&self) -> bool {
        match self.tabs.selected() {
            0 => self.list.focus() == PagedListFocus::Filter,
            _ => self.autocomplete.is_open(),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global bindings first.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }
        if !self.editing() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Tab => {
                    self.focused_pane = self.focused_pane.toggle();
                    debug!("focus moved to {:?}", self.focused_pane);
                    return;
                }
                KeyCode::Char('x') => {
                    if self.alerts.handle_key(key).is_some() {
                        return;
                    }
                }
                _ => {}
            }
        }

        match self.focused_pane {
            Pane::Tabs => {
                let bar = TabBar::new(TAB_TITLES);
                bar.handle_key(key, &mut self.tabs);
            }
            Pane::Content => match self.tabs.selected() {
                0 => self.handle_applications_key(key),
                _ => self.handle_agents_key(key),
            },
        }
    }

    fn handle_applications_key(&mut self, key: KeyEvent) {
        let list = FilterablePagedList::new(&self.records)
            .filter_fields(FILTER_FIELDS)
            .columns(COLUMNS)
            .loading(self.loading);
        if let Some(PagedListOutcome::RowAction(record)) = list.handle_key(key, &mut self.list) {
            let name = record.display_string("name");
            self.alerts.info(format!("Opened menu for {name}"));
        }
    }

    fn handle_agents_key(&mut self, key: KeyEvent) {
        let auto = Autocomplete::new(&self.agent_names).label("Agent");
        match auto.handle_key(key, &mut self.autocomplete) {
            Some(AutocompleteOutcome::Selected(name)) => {
                self.alerts.info(format!("Agent selected: {name}"));
            }
            Some(AutocompleteOutcome::Cleared) => {
                debug!("agent selection cleared");
            }
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let areas = self.areas;

        if self.alerts.handle_mouse(mouse, areas.alerts).is_some() {
            return;
        }

        let bar = TabBar::new(TAB_TITLES);
        if bar.handle_mouse(mouse, areas.tabs, &mut self.tabs).is_some() {
            self.focused_pane = Pane::Content;
            return;
        }

        match self.tabs.selected() {
            0 => {
                let list = FilterablePagedList::new(&self.records)
                    .filter_fields(FILTER_FIELDS)
                    .columns(COLUMNS)
                    .loading(self.loading);
                if let Some(PagedListOutcome::RowAction(record)) =
                    list.handle_mouse(mouse, areas.content, &mut self.list)
                {
                    let name = record.display_string("name");
                    self.alerts.info(format!("Opened menu for {name}"));
                }
            }
            _ => {
                let zone = DropZone::new(DROP_LABEL).loading(self.deploying.is_some());
                if let Some(DropOutcome::Dropped) =
                    zone.handle_mouse(mouse, areas.drop_zone, &mut self.drop_zone)
                {
                    info!("config dropped, starting deploy");
                    self.deploying = Some(DEPLOY_TICKS);
                }
            }
        }
    }
}
