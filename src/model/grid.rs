// File: ./src/model/grid.rs
// Month grid generation: weekday labels, leading blanks, then one cell per day
use chrono::{Datelike, NaiveDate};

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    DayName(&'static str),
    Empty,
    Day(u32),
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    // Cursor guarantees a valid month; fall back to the epoch only for
    // years outside chrono's range.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// Number of days in `month`, leap years included. Computed as the day
/// before the 1st of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of(next_year, next_month)
        .pred_opt()
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    first_of(year, month).weekday().num_days_from_sunday()
}

pub fn day_grid(year: i32, month: u32) -> Vec<GridCell> {
    let blanks = first_weekday(year, month);
    let days = days_in_month(year, month);
    let mut cells = Vec::with_capacity(7 + (blanks + days) as usize);
    cells.extend(DAY_NAMES.into_iter().map(GridCell::DayName));
    cells.extend((0..blanks).map(|_| GridCell::Empty));
    cells.extend((1..=days).map(GridCell::Day));
    cells
}

/// Header label, e.g. "October 2026".
pub fn month_label(year: i32, month: u32) -> String {
    first_of(year, month).format("%B %Y").to_string()
}
