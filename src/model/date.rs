// File: ./src/model/date.rs
// Canonical date keys and the month cursor
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Packed `year*10000 + month*100 + day`. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(i32);

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
        debug_assert!((1..=31).contains(&day), "day out of range: {}", day);
        Self(year * 10000 + month as i32 * 100 + day as i32)
    }

    pub fn packed(self) -> i32 {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.div_euclid(10000)
    }

    pub fn month(self) -> u32 {
        (self.0.rem_euclid(10000) / 100) as u32
    }

    pub fn day(self) -> u32 {
        self.0.rem_euclid(100) as u32
    }

    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// The (year, month) the grid is currently displaying. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub year: i32,
    pub month: u32,
}

impl Cursor {
    pub fn new(year: i32, month: u32) -> Self {
        // Normalize through a zero-based month offset so 0 and 13 wrap into
        // the neighbouring years.
        let offset = year * 12 + month as i32 - 1;
        Self {
            year: offset.div_euclid(12),
            month: offset.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(now.year(), now.month())
    }

    fn shifted(self, delta: i32) -> Self {
        let offset = self.year * 12 + self.month as i32 - 1 + delta;
        Self {
            year: offset.div_euclid(12),
            month: offset.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn prev_month(self) -> Self {
        self.shifted(-1)
    }

    pub fn next_month(self) -> Self {
        self.shifted(1)
    }

    /// Canonical key for `day` of the displayed month.
    pub fn date_of(self, day: u32) -> DateKey {
        DateKey::new(self.year, self.month, day)
    }

    pub fn contains(self, date: DateKey) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_packs_and_unpacks() {
        let key = DateKey::new(2024, 2, 29);
        assert_eq!(key.packed(), 20240229);
        assert_eq!((key.year(), key.month(), key.day()), (2024, 2, 29));
        assert_eq!(key.to_string(), "2024-02-29");
        assert_eq!(key.to_naive(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn date_keys_order_chronologically() {
        assert!(DateKey::new(2023, 12, 31) < DateKey::new(2024, 1, 1));
        assert!(DateKey::new(2024, 1, 31) < DateKey::new(2024, 2, 1));
    }

    #[test]
    fn cursor_wraps_year_boundaries() {
        assert_eq!(Cursor::new(2024, 12).next_month(), Cursor::new(2025, 1));
        assert_eq!(Cursor::new(2024, 1).prev_month(), Cursor::new(2023, 12));
        assert_eq!(Cursor::new(2024, 6).next_month(), Cursor::new(2024, 7));
    }

    #[test]
    fn cursor_new_normalizes_overflow() {
        assert_eq!(Cursor::new(2024, 13), Cursor { year: 2025, month: 1 });
        assert_eq!(Cursor::new(2024, 0), Cursor { year: 2023, month: 12 });
    }

    #[test]
    fn cursor_date_of_builds_key_in_month() {
        let cursor = Cursor::new(2026, 10);
        let key = cursor.date_of(19);
        assert_eq!(key, DateKey::new(2026, 10, 19));
        assert!(cursor.contains(key));
        assert!(!cursor.next_month().contains(key));
    }
}
