#![cfg(feature = "tui")]

use calpad::config::Config;
use calpad::model::{Cursor, DateKey};
use calpad::store::CalendarStore;
use calpad::tui::action::Action;
use calpad::tui::state::AppState;
use calpad::tui::view::draw;
use ratatui::{Terminal, backend::TestBackend};

fn render(state: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| draw(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn state_at(year: i32, month: u32, day: u32) -> AppState {
    AppState::with_store(
        CalendarStore::new(Cursor::new(year, month)),
        day,
        DateKey::new(year, month, day),
        &Config::default(),
    )
}

#[test]
fn renders_month_label_and_weekdays() {
    let mut state = state_at(2024, 2, 14);
    let screen = render(&mut state);
    assert!(screen.contains("February 2024"), "{}", screen);
    assert!(screen.contains("Sun"));
    assert!(screen.contains("Sat"));
    assert!(screen.contains("29"));
}

#[test]
fn empty_details_show_placeholder() {
    let mut state = state_at(2024, 2, 14);
    state.apply(Action::ToggleDetails);
    let screen = render(&mut state);
    assert!(screen.contains("All Events"));
    assert!(screen.contains("No events added to the calendar."));
}

#[test]
fn details_list_shows_events_and_filter_bar() {
    let mut state = state_at(2024, 2, 14);
    state.apply(Action::OpenForm);
    for c in "Budget #work".chars() {
        state.apply(Action::InputChar(c));
    }
    state.apply(Action::Submit);
    state.apply(Action::ToggleFilter);

    let screen = render(&mut state);
    assert!(screen.contains("2024-02-14: Budget (Work)"), "{}", screen);
    assert!(screen.contains("Filter:"));
    assert!(screen.contains("Personal"));
}

#[test]
fn form_title_reflects_mode() {
    let mut state = state_at(2024, 2, 14);
    state.apply(Action::OpenForm);
    let screen = render(&mut state);
    assert!(screen.contains("Add Event 2024-02-14 (Work)"), "{}", screen);
}

#[test]
fn long_input_keeps_cursor_inside_form() {
    let mut state = state_at(2024, 2, 14);
    state.apply(Action::OpenForm);
    let text = format!("{}END", "x".repeat(140));
    for c in text.chars() {
        state.apply(Action::InputChar(c));
    }

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| draw(f, &mut state)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    assert!(cursor.x >= 1 && cursor.x <= 98, "cursor at {:?}", cursor);

    let buffer = terminal.backend().buffer();
    let row: String = (0..buffer.area.width)
        .map(|x| buffer[(x, cursor.y)].symbol().to_string())
        .collect();
    assert!(row.contains("END"), "{}", row);
}
