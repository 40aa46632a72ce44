// File: ./src/store.rs
//! In-memory calendar state.
//!
//! `EventStore` maps a [`DateKey`] to the events of that day, keeping both the
//! order in which dates were first used and the order of events within a day.
//! No date ever maps to an empty list.
//!
//! `CalendarStore` wraps the event store together with the month cursor, the
//! list filter and the form selection, and is updated only through
//! [`CalendarStore::reduce`].
use crate::model::{Category, Cursor, DateKey, EventRecord, Filter, GridCell, day_grid};
use log::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    days: Vec<(DateKey, Vec<EventRecord>)>,
}

/// One row of the flattened event list. `index` is the position of the
/// record inside its own day, not inside the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedEvent<'a> {
    pub date: DateKey,
    pub index: usize,
    pub description: &'a str,
    pub category: Category,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, date: DateKey) -> Option<usize> {
        self.days.iter().position(|(d, _)| *d == date)
    }

    pub fn get(&self, date: DateKey) -> Option<&[EventRecord]> {
        self.position(date).map(|pos| self.days[pos].1.as_slice())
    }

    pub fn has_events(&self, date: DateKey) -> bool {
        self.position(date).is_some()
    }

    /// Dates in first-insertion order.
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days.iter().map(|(d, _)| *d)
    }

    /// Total number of records across all dates.
    pub fn len(&self) -> usize {
        self.days.iter().map(|(_, events)| events.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Appends `record` to `date`. Returns false (and stores nothing) when the
    /// description is blank.
    pub fn add(&mut self, date: DateKey, record: EventRecord) -> bool {
        if !record.is_valid() {
            debug!("event=add_event status=rejected reason=blank_description date={}", date);
            return false;
        }
        match self.position(date) {
            Some(pos) => self.days[pos].1.push(record),
            None => self.days.push((date, vec![record])),
        }
        true
    }

    /// Replaces the record at `index` in place. Blank descriptions are rejected
    /// the same way as on add.
    pub fn edit(&mut self, date: DateKey, index: usize, record: EventRecord) -> bool {
        if !record.is_valid() {
            debug!("event=edit_event status=rejected reason=blank_description date={}", date);
            return false;
        }
        let slot = self
            .position(date)
            .and_then(|pos| self.days[pos].1.get_mut(index));
        debug_assert!(slot.is_some(), "edit of missing event {}#{}", date, index);
        match slot {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                warn!("event=edit_event status=missing date={} index={}", date, index);
                false
            }
        }
    }

    /// Removes the record at `index`; drops the date when its list empties.
    pub fn delete(&mut self, date: DateKey, index: usize) -> Option<EventRecord> {
        let pos = self
            .position(date)
            .filter(|&pos| index < self.days[pos].1.len());
        debug_assert!(pos.is_some(), "delete of missing event {}#{}", date, index);
        let Some(pos) = pos else {
            warn!("event=delete_event status=missing date={} index={}", date, index);
            return None;
        };
        let events = &mut self.days[pos].1;
        let removed = events.remove(index);
        if events.is_empty() {
            self.days.remove(pos);
        }
        Some(removed)
    }

    /// Flattens the store in date-insertion order, then per-day order,
    /// keeping only records matching `filter`. Each call starts a fresh pass.
    pub fn list(&self, filter: Filter) -> impl Iterator<Item = ListedEvent<'_>> + '_ {
        self.days.iter().flat_map(move |(date, events)| {
            events
                .iter()
                .enumerate()
                .filter(move |(_, e)| filter.matches(e.category))
                .map(move |(index, e)| ListedEvent {
                    date: *date,
                    index,
                    description: e.description.as_str(),
                    category: e.category,
                })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Date picked for the form, plus the record being edited (absent when adding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub date: DateKey,
    pub edit_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Navigate(Direction),
    SelectDay(u32),
    BeginEdit {
        date: DateKey,
        index: usize,
    },
    SubmitEvent {
        date: DateKey,
        description: String,
        category: Category,
        edit_index: Option<usize>,
    },
    CancelForm,
    DeleteEvent {
        date: DateKey,
        index: usize,
    },
    SetFilter(Filter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarStore {
    cursor: Cursor,
    events: EventStore,
    filter: Filter,
    selection: Option<Selection>,
}

impl CalendarStore {
    pub fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            events: EventStore::new(),
            filter: Filter::All,
            selection: None,
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn grid(&self) -> Vec<GridCell> {
        day_grid(self.cursor.year, self.cursor.month)
    }

    pub fn listed(&self) -> impl Iterator<Item = ListedEvent<'_>> + '_ {
        self.events.list(self.filter)
    }

    pub fn event_at(&self, date: DateKey, index: usize) -> Option<&EventRecord> {
        self.events.get(date).and_then(|events| events.get(index))
    }

    /// Applies one user intent and returns the next state.
    pub fn reduce(mut self, intent: Intent) -> Self {
        match intent {
            Intent::Navigate(direction) => {
                self.cursor = match direction {
                    Direction::Prev => self.cursor.prev_month(),
                    Direction::Next => self.cursor.next_month(),
                };
                debug!(
                    "event=navigate direction={:?} year={} month={}",
                    direction, self.cursor.year, self.cursor.month
                );
            }
            Intent::SelectDay(day) => {
                self.selection = Some(Selection {
                    date: self.cursor.date_of(day),
                    edit_index: None,
                });
            }
            Intent::BeginEdit { date, index } => {
                if self.event_at(date, index).is_some() {
                    self.selection = Some(Selection {
                        date,
                        edit_index: Some(index),
                    });
                }
            }
            Intent::SubmitEvent {
                date,
                description,
                category,
                edit_index,
            } => {
                let record = EventRecord::new(description, category);
                let stored = match edit_index {
                    Some(index) => self.events.edit(date, index, record),
                    None => self.events.add(date, record),
                };
                // A rejected submit keeps the form open.
                if stored {
                    info!(
                        "event=submit_event status=ok mode={} date={} category={}",
                        if edit_index.is_some() { "edit" } else { "add" },
                        date,
                        category
                    );
                    self.selection = None;
                }
            }
            Intent::CancelForm => {
                self.selection = None;
            }
            Intent::DeleteEvent { date, index } => {
                if self.events.delete(date, index).is_some() {
                    info!("event=delete_event status=ok date={} index={}", date, index);
                }
                // An open edit on the same day may now point at a shifted record.
                if let Some(sel) = self.selection
                    && sel.date == date
                    && sel.edit_index.is_some()
                {
                    self.selection = None;
                }
            }
            Intent::SetFilter(filter) => {
                debug!("event=set_filter filter={}", filter);
                self.filter = filter;
            }
        }
        self
    }
}
