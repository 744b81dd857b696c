use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use edgeboard_widgets::paged_list::{page_bounds, page_count};
use edgeboard_widgets::{
    Column, FilterablePagedList, PagedListFocus, PagedListOutcome, PagedListState, Record,
};

const FILTER_FIELDS: &[&str] = &["name", "description"];
const COLUMNS: &[Column<'static>] = &[
    Column {
        header: "Name",
        field: "name",
    },
    Column {
        header: "Description",
        field: "description",
    },
];

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn record(name: &str, description: &str) -> Record {
    Record::new().set("name", name).set("description", description)
}

fn catalog(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| record(&format!("item-{i}"), "widget"))
        .collect()
}

fn list<'a>(records: &'a [Record]) -> FilterablePagedList<'a> {
    FilterablePagedList::new(records)
        .filter_fields(FILTER_FIELDS)
        .columns(COLUMNS)
}

// ============================================================================
// Pagination math
// ============================================================================

#[test]
fn page_bounds_clamp_to_total() {
    // 12 matches, page size 5, page 2: rows 10-11 only.
    assert_eq!(page_bounds(12, 2, 5), (10, 12));
    // Out-of-range page yields an empty slice, never a panic.
    assert_eq!(page_bounds(12, 5, 5), (12, 12));
    assert_eq!(page_bounds(0, 0, 5), (0, 0));
}

#[test]
fn rows_on_page_match_the_clamped_formula() {
    for (total, page, page_size) in [(12, 2, 5), (12, 0, 25), (3, 0, 5), (5, 1, 5), (0, 0, 5)] {
        let (start, end) = page_bounds(total, page, page_size);
        let expected = page_size.min(total.saturating_sub(page * page_size));
        assert_eq!(end - start, expected, "total={total} page={page} size={page_size}");
    }
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(12, 5), 3);
    assert_eq!(page_count(10, 5), 2);
    assert_eq!(page_count(0, 5), 0);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn filter_matches_any_field_case_insensitively() {
    let records = vec![
        record("Router", "edge gateway"),
        record("camera", "Video FEED"),
    ];
    let list = list(&records);
    let mut state = PagedListState::new();

    state.set_filter("feed");
    let filtered = list.filtered(&state);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].display_string("name"), "camera");

    // Matches on the other field too.
    state.set_filter("gateway");
    assert_eq!(list.filtered(&state)[0].display_string("name"), "Router");
}

#[test]
fn two_record_scenario_from_the_dashboard() {
    let records = vec![record("a", "x"), record("b", "y")];
    let list = list(&records);
    let mut state = PagedListState::new();
    state.set_filter("a");

    let filtered = list.filtered(&state);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].display_string("name"), "a");
}

#[test]
fn filtering_is_idempotent() {
    let records = catalog(7);
    let list = list(&records);
    let mut state = PagedListState::new();
    state.set_filter("item-1");

    let once = list.filtered(&state);
    let twice = list.filtered(&state);
    assert_eq!(once, twice);
}

#[test]
fn empty_filter_restores_original_order() {
    let records = vec![record("c", ""), record("a", ""), record("b", "")];
    let list = list(&records);
    let mut state = PagedListState::new();
    state.set_filter("a");
    assert_eq!(list.filtered(&state).len(), 1);

    state.set_filter("");
    let names: Vec<String> = list
        .filtered(&state)
        .iter()
        .map(|r| r.display_string("name"))
        .collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn missing_fields_stringify_to_empty_and_never_match() {
    let records = vec![Record::new().set("name", "solo")];
    let list = list(&records);
    let mut state = PagedListState::new();

    // "description" is absent: filtering on it must not panic, and the
    // empty stringification cannot contain the needle.
    state.set_filter("ghost");
    assert!(list.filtered(&state).is_empty());

    state.set_filter("");
    assert_eq!(list.filtered(&state).len(), 1);
}

#[test]
fn loading_skips_filtering_entirely() {
    let records = catalog(12);
    let list = list(&records).loading(true);
    let state = PagedListState::new();
    assert!(list.filtered(&state).is_empty());
}

// ============================================================================
// State transitions
// ============================================================================

#[test]
fn typing_lowercases_the_filter_and_resets_the_page() {
    let records = catalog(12);
    let list = list(&records);
    let mut state = PagedListState::new();

    list.handle_key(key(KeyCode::Right), &mut state);
    assert_eq!(state.page(), 1);

    list.handle_key(key(KeyCode::Char('/')), &mut state);
    assert_eq!(state.focus(), PagedListFocus::Filter);

    let outcome = list.handle_key(
        KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT),
        &mut state,
    );
    assert_eq!(outcome, Some(PagedListOutcome::FilterChanged));
    assert_eq!(state.filter(), "i");
    assert_eq!(state.page(), 0);
}

#[test]
fn page_size_change_resets_the_page() {
    let records = catalog(30);
    let list = list(&records);
    let mut state = PagedListState::new();

    list.handle_key(key(KeyCode::Right), &mut state);
    list.handle_key(key(KeyCode::Right), &mut state);
    assert_eq!(state.page(), 2);

    let outcome = list.handle_key(key(KeyCode::Char('s')), &mut state);
    assert_eq!(outcome, Some(PagedListOutcome::PageSizeChanged(10)));
    assert_eq!(state.page(), 0);
    assert_eq!(state.page_size(), 10);
}

#[test]
fn page_navigation_clamps_at_both_ends() {
    let records = catalog(12);
    let list = list(&records);
    let mut state = PagedListState::new();

    assert_eq!(list.handle_key(key(KeyCode::Left), &mut state), None);
    assert_eq!(state.page(), 0);

    assert_eq!(
        list.handle_key(key(KeyCode::End), &mut state),
        Some(PagedListOutcome::PageChanged(2))
    );
    assert_eq!(list.handle_key(key(KeyCode::Right), &mut state), None);
    assert_eq!(state.page(), 2);

    assert_eq!(
        list.handle_key(key(KeyCode::Home), &mut state),
        Some(PagedListOutcome::PageChanged(0))
    );
}

#[test]
fn escape_clears_the_filter_and_returns_to_the_table() {
    let records = vec![record("a", "x"), record("b", "y")];
    let list = list(&records);
    let mut state = PagedListState::new();

    list.handle_key(key(KeyCode::Char('/')), &mut state);
    list.handle_key(key(KeyCode::Char('a')), &mut state);
    assert_eq!(list.filtered(&state).len(), 1);

    let outcome = list.handle_key(key(KeyCode::Esc), &mut state);
    assert_eq!(outcome, Some(PagedListOutcome::FilterChanged));
    assert_eq!(state.filter(), "");
    assert_eq!(state.focus(), PagedListFocus::Table);
    assert_eq!(list.filtered(&state).len(), 2);
}

#[test]
fn escape_with_no_filter_emits_nothing() {
    let records = catalog(2);
    let list = list(&records);
    let mut state = PagedListState::new();
    list.handle_key(key(KeyCode::Char('/')), &mut state);
    assert_eq!(list.handle_key(key(KeyCode::Esc), &mut state), None);
}

// ============================================================================
// Row action delegation
// ============================================================================

#[test]
fn enter_emits_the_cursor_row() {
    let records = catalog(12);
    let list = list(&records);
    let mut state = PagedListState::new();

    list.handle_key(key(KeyCode::Down), &mut state);
    list.handle_key(key(KeyCode::Down), &mut state);
    let outcome = list.handle_key(key(KeyCode::Enter), &mut state);

    match outcome {
        Some(PagedListOutcome::RowAction(record)) => {
            assert_eq!(record.display_string("name"), "item-2");
        }
        other => panic!("expected row action, got {other:?}"),
    }
}

#[test]
fn row_action_respects_the_current_page() {
    let records = catalog(12);
    let list = list(&records);
    let mut state = PagedListState::new();

    list.handle_key(key(KeyCode::End), &mut state);
    let outcome = list.handle_key(key(KeyCode::Char('m')), &mut state);
    match outcome {
        Some(PagedListOutcome::RowAction(record)) => {
            assert_eq!(record.display_string("name"), "item-10");
        }
        other => panic!("expected row action, got {other:?}"),
    }
}

#[test]
fn enter_on_an_empty_page_emits_nothing() {
    let records: Vec<Record> = Vec::new();
    let list = list(&records);
    let mut state = PagedListState::new();
    assert_eq!(list.handle_key(key(KeyCode::Enter), &mut state), None);
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn clicking_the_action_cell_triggers_the_row_action() {
    let records = catalog(3);
    let list = list(&records);
    let mut state = PagedListState::new();
    let area = Rect::new(0, 0, 40, 10);

    // Filter line is row 0, header row 1, first data row at 2; the action
    // cell occupies the trailing 3 columns.
    let outcome = list.handle_mouse(click(38, 3), area, &mut state);
    match outcome {
        Some(PagedListOutcome::RowAction(record)) => {
            assert_eq!(record.display_string("name"), "item-1");
        }
        other => panic!("expected row action, got {other:?}"),
    }
}

#[test]
fn clicking_a_row_moves_the_cursor_without_acting() {
    let records = catalog(3);
    let list = list(&records);
    let mut state = PagedListState::new();
    let area = Rect::new(0, 0, 40, 10);

    assert_eq!(list.handle_mouse(click(5, 4), area, &mut state), None);
    assert_eq!(state.cursor(), 2);
}

#[test]
fn clicking_the_pager_arrows_changes_pages() {
    let records = catalog(12);
    let list = list(&records);
    let mut state = PagedListState::new();
    let area = Rect::new(0, 0, 40, 10);

    // Next arrow sits two columns in from the right edge of the pager line.
    let outcome = list.handle_mouse(click(38, 9), area, &mut state);
    assert_eq!(outcome, Some(PagedListOutcome::PageChanged(1)));

    let outcome = list.handle_mouse(click(36, 9), area, &mut state);
    assert_eq!(outcome, Some(PagedListOutcome::PageChanged(0)));
}

#[test]
fn clicking_the_filter_line_focuses_the_filter() {
    let records = catalog(3);
    let list = list(&records);
    let mut state = PagedListState::new();
    let area = Rect::new(0, 0, 40, 10);

    list.handle_mouse(click(3, 0), area, &mut state);
    assert_eq!(state.focus(), PagedListFocus::Filter);
}
