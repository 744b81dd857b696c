//! Frame layout: tab strip on top, active screen below, alerts overlaid
//! bottom-left.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Clear;
use ratatui::Frame;

use edgeboard_widgets::{
    AlertBanners, Autocomplete, DropZone, FilterablePagedList, TabBar, Theme,
};

use crate::app::{App, COLUMNS, DROP_LABEL, FILTER_FIELDS, TAB_TITLES};

const MAX_ALERT_ROWS: u16 = 4;
const ALERT_WIDTH: u16 = 44;

pub fn draw(f: &mut Frame, app: &mut App) {
    let [tabs_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).areas(f.area());
    app.areas.tabs = tabs_area;
    app.areas.content = content_area;

    f.render_stateful_widget(TabBar::new(TAB_TITLES), tabs_area, &mut app.tabs);

    match app.tabs.selected() {
        0 => draw_applications(f, app, content_area),
        _ => draw_agents(f, app, content_area),
    }

    draw_alerts(f, app, content_area);
}

fn draw_applications(f: &mut Frame, app: &mut App, area: Rect) {
    let list = FilterablePagedList::new(&app.records)
        .filter_fields(FILTER_FIELDS)
        .columns(COLUMNS)
        .loading(app.loading);
    f.render_stateful_widget(list, area, &mut app.list);
}

fn draw_agents(f: &mut Frame, app: &mut App, area: Rect) {
    let [auto_area, zone_area, hint_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);
    app.areas.autocomplete = auto_area;
    app.areas.drop_zone = zone_area;

    let auto = Autocomplete::new(&app.agent_names)
        .label("Agent")
        .placeholder("type to search agents");
    f.render_stateful_widget(auto, auto_area, &mut app.autocomplete);

    let zone = DropZone::new(DROP_LABEL)
        .loading(app.deploying())
        .tick(app.tick);
    f.render_stateful_widget(zone, zone_area, &mut app.drop_zone);

    if hint_area.height > 0 {
        let hint = Line::styled(
            " Tab switches focus · q quits",
            Style::default().fg(Theme::default().muted),
        );
        f.render_widget(hint, hint_area);
    }
}

fn draw_alerts(f: &mut Frame, app: &mut App, content_area: Rect) {
    if app.alerts.is_empty() {
        app.areas.alerts = Rect::default();
        return;
    }

    let banners = AlertBanners::new(&app.alerts);
    let height = banners.height().min(MAX_ALERT_ROWS).min(content_area.height);
    let area = Rect {
        x: content_area.x,
        y: content_area.bottom().saturating_sub(height),
        width: content_area.width.min(ALERT_WIDTH),
        height,
    };
    f.render_widget(Clear, area);
    f.render_widget(banners, area);
    app.areas.alerts = area;
}
