//! Minimal filterable table demo.
//!
//! Run with: cargo run --example paged_list -p edgeboard-widgets
//! Keys: / filter, arrows navigate, s page size, Enter row action, q quit.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use edgeboard_widgets::{
    Column, FilterablePagedList, PagedListFocus, PagedListOutcome, PagedListState, Record,
};

fn sample() -> Vec<Record> {
    let apps = [
        ("heat-mapper", "Thermal overlay service"),
        ("freight-tracker", "Fleet telemetry collector"),
        ("shelf-scanner", "Inventory vision pipeline"),
        ("door-counter", "Footfall analytics"),
        ("leak-detector", "Pipeline acoustic monitor"),
        ("crop-monitor", "Field moisture sensing"),
        ("cold-chain", "Refrigeration watchdog"),
    ];
    apps.iter()
        .map(|(name, description)| {
            Record::new().set("name", *name).set("description", *description)
        })
        .collect()
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let records = sample();
    let columns = [Column::new("Name", "name"), Column::new("Description", "description")];
    let filter_fields = ["name", "description"];
    let mut state = PagedListState::new();
    let mut last_action = String::new();

    loop {
        let list = FilterablePagedList::new(&records)
            .filter_fields(&filter_fields)
            .columns(&columns);

        terminal.draw(|f| {
            let [list_area, status_area] = ratatui::layout::Layout::vertical([
                ratatui::layout::Constraint::Min(3),
                ratatui::layout::Constraint::Length(1),
            ])
            .areas(f.area());
            f.render_stateful_widget(list.clone(), list_area, &mut state);
            if !last_action.is_empty() {
                f.render_widget(
                    ratatui::text::Line::raw(format!(" action on: {last_action}")),
                    status_area,
                );
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let editing = state.focus() == PagedListFocus::Filter;
            if !editing && key.code == KeyCode::Char('q') {
                break;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            if let Some(PagedListOutcome::RowAction(record)) = list.handle_key(key, &mut state) {
                last_action = record.display_string("name");
            }
        }
    }

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
