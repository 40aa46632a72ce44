use calpad::model::{Category, Cursor, DateKey, EventRecord, Filter, day_grid, days_in_month, first_weekday};
use calpad::store::{CalendarStore, Direction, EventStore, Intent};

fn submit(date: DateKey, text: &str, category: Category) -> Intent {
    Intent::SubmitEvent {
        date,
        description: text.to_string(),
        category,
        edit_index: None,
    }
}

#[test]
fn grid_length_matches_month_shape() {
    for year in [1999, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            let grid = day_grid(year, month);
            let expected = 7 + first_weekday(year, month) + days_in_month(year, month);
            assert_eq!(grid.len(), expected as usize, "{}-{}", year, month);
        }
    }
}

#[test]
fn leap_year_february() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn navigation_wraps_years() {
    let state = CalendarStore::new(Cursor::new(2024, 12)).reduce(Intent::Navigate(Direction::Next));
    assert_eq!(state.cursor(), Cursor::new(2025, 1));

    let state = CalendarStore::new(Cursor::new(2024, 1)).reduce(Intent::Navigate(Direction::Prev));
    assert_eq!(state.cursor(), Cursor::new(2023, 12));
}

#[test]
fn added_event_listed_exactly_once() {
    let d = DateKey::new(2024, 5, 1);
    let state = CalendarStore::new(Cursor::new(2024, 5))
        .reduce(Intent::SelectDay(1))
        .reduce(submit(d, "Launch", Category::Work));

    let hits: Vec<_> = state
        .events()
        .list(Filter::All)
        .filter(|e| e.description == "Launch")
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, d);
    assert_eq!(state.selection(), None, "form should close after a valid submit");
}

#[test]
fn blank_submit_keeps_selection() {
    let d = DateKey::new(2024, 5, 2);
    let state = CalendarStore::new(Cursor::new(2024, 5))
        .reduce(Intent::SelectDay(2))
        .reduce(submit(d, "  ", Category::Work));
    assert!(state.events().is_empty());
    assert!(state.selection().is_some());
}

#[test]
fn deleting_only_event_removes_date() {
    let d = DateKey::new(2024, 5, 3);
    let state = CalendarStore::new(Cursor::new(2024, 5))
        .reduce(submit(d, "Only", Category::Personal))
        .reduce(Intent::DeleteEvent { date: d, index: 0 });
    assert!(!state.events().has_events(d));
    assert_eq!(state.events().dates().count(), 0);
}

#[test]
fn filter_returns_matching_subset_in_order() {
    let mut store = EventStore::new();
    let a = DateKey::new(2024, 6, 9);
    let b = DateKey::new(2024, 6, 2);
    store.add(a, EventRecord::new("w1", Category::Work));
    store.add(a, EventRecord::new("p1", Category::Personal));
    store.add(b, EventRecord::new("w2", Category::Work));
    store.add(a, EventRecord::new("w3", Category::Work));
    store.add(b, EventRecord::new("p2", Category::Personal));

    let work: Vec<_> = store.list(Filter::Work).map(|e| e.description).collect();
    assert_eq!(work, vec!["w1", "w3", "w2"]);

    let personal: Vec<_> = store.list(Filter::Personal).map(|e| e.description).collect();
    assert_eq!(personal, vec!["p1", "p2"]);

    let all: Vec<_> = store.list(Filter::All).map(|e| e.description).collect();
    assert_eq!(all, vec!["w1", "p1", "w3", "w2", "p2"]);

    // Listed indices address the record inside its own day.
    let w3 = store.list(Filter::Work).nth(1).unwrap();
    assert_eq!((w3.date, w3.index), (a, 2));
}

#[test]
fn filter_does_not_touch_store() {
    let d = DateKey::new(2024, 6, 1);
    let state = CalendarStore::new(Cursor::new(2024, 6))
        .reduce(submit(d, "a", Category::Work))
        .reduce(submit(d, "b", Category::Personal))
        .reduce(Intent::SetFilter(Filter::Personal));
    assert_eq!(state.listed().count(), 1);
    assert_eq!(state.events().len(), 2);
}

#[test]
fn edit_replaces_in_place() {
    let d = DateKey::new(2024, 7, 4);
    let state = CalendarStore::new(Cursor::new(2024, 7))
        .reduce(submit(d, "e1", Category::Work))
        .reduce(Intent::BeginEdit { date: d, index: 0 })
        .reduce(Intent::SubmitEvent {
            date: d,
            description: "e2".to_string(),
            category: Category::Personal,
            edit_index: Some(0),
        });
    assert_eq!(
        state.events().get(d).unwrap(),
        &[EventRecord::new("e2", Category::Personal)]
    );
    assert_eq!(state.selection(), None);
}

#[test]
fn cancel_clears_selection() {
    let state = CalendarStore::new(Cursor::new(2024, 7))
        .reduce(Intent::SelectDay(9))
        .reduce(Intent::CancelForm);
    assert_eq!(state.selection(), None);
}
