use crate::config::Config;
use crate::model::parser::parse_smart_input;
use crate::model::{Category, Cursor, DateKey, days_in_month};
use crate::store::{CalendarStore, Direction, Intent};
use crate::tui::action::Action;
use chrono::{Datelike, Duration, Local};
use crossterm::event::{KeyCode, MouseEventKind};
use log::debug;
use ratatui::widgets::ListState;
use std::collections::HashMap;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Grid,
    Details,
}

pub struct AppState {
    pub store: CalendarStore,
    pub selected_day: u32,
    pub today: DateKey,
    pub active_focus: Focus,
    pub details_open: bool,
    pub filter_open: bool,
    pub list_state: ListState,
    pub message: String,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub form_category: Category,
    default_category: Category,
    aliases: HashMap<String, Category>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let now = Local::now().date_naive();
        let cursor = Cursor::new(now.year(), now.month());
        Self::with_store(
            CalendarStore::new(cursor).with_filter(config.default_filter),
            now.day(),
            DateKey::from(now),
            config,
        )
    }

    pub fn with_store(
        store: CalendarStore,
        selected_day: u32,
        today: DateKey,
        config: &Config,
    ) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            store,
            selected_day,
            today,
            active_focus: Focus::Grid,
            details_open: false,
            filter_open: false,
            list_state: l_state,
            message: "Enter: Add | v: Details | f: Filter | q: Quit".to_string(),
            input_buffer: String::new(),
            cursor_position: 0,
            form_category: config.default_category,
            default_category: config.default_category,
            aliases: config.tag_aliases.clone(),
        }
    }

    pub fn form_open(&self) -> bool {
        self.store.selection().is_some()
    }

    pub fn selected_date(&self) -> DateKey {
        self.store.cursor().date_of(self.selected_day)
    }

    /// (date, per-day index) of every row in the details list, in display order.
    pub fn listed_addresses(&self) -> Vec<(DateKey, usize)> {
        self.store.listed().map(|e| (e.date, e.index)).collect()
    }

    fn dispatch(&mut self, intent: Intent) {
        debug!("event=dispatch intent={:?}", intent);
        let placeholder = CalendarStore::new(self.store.cursor());
        let store = std::mem::replace(&mut self.store, placeholder);
        self.store = store.reduce(intent);
    }

    /// Maps a key to an action for the current mode. `None` means the key is unbound.
    pub fn action_for_key(&self, code: KeyCode) -> Option<Action> {
        if self.form_open() {
            return match code {
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Esc => Some(Action::Cancel),
                KeyCode::Tab => Some(Action::ToggleCategory),
                KeyCode::Backspace => Some(Action::InputBackspace),
                KeyCode::Left => Some(Action::InputLeft),
                KeyCode::Right => Some(Action::InputRight),
                KeyCode::Char(c) => Some(Action::InputChar(c)),
                _ => None,
            };
        }

        let shared = match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('p') | KeyCode::PageUp => Some(Action::Navigate(Direction::Prev)),
            KeyCode::Char('n') | KeyCode::PageDown => Some(Action::Navigate(Direction::Next)),
            KeyCode::Char('v') => Some(Action::ToggleDetails),
            KeyCode::Char('f') => Some(Action::ToggleFilter),
            KeyCode::Char('a') => Some(Action::OpenForm),
            _ => None,
        };
        if shared.is_some() {
            return shared;
        }

        match self.active_focus {
            Focus::Grid => match code {
                KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveDay(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveDay(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveDay(-7)),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDay(7)),
                KeyCode::Enter => Some(Action::OpenForm),
                KeyCode::Tab if self.details_open => Some(Action::ToggleFocus),
                _ => None,
            },
            Focus::Details => match code {
                KeyCode::Down | KeyCode::Char('j') => Some(Action::ListNext),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::ListPrevious),
                KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditSelected),
                KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
                KeyCode::Tab if self.filter_open => Some(Action::CycleFilter),
                KeyCode::Tab | KeyCode::Esc => Some(Action::ToggleFocus),
                _ => None,
            },
        }
    }

    /// Scroll wheel flips months, but never while the form is open: the form
    /// is bound to the date it was opened on.
    pub fn action_for_mouse(&self, kind: MouseEventKind) -> Option<Action> {
        if self.form_open() {
            return None;
        }
        match kind {
            MouseEventKind::ScrollDown => Some(Action::Navigate(Direction::Next)),
            MouseEventKind::ScrollUp => Some(Action::Navigate(Direction::Prev)),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveDay(delta) => self.move_day(delta),
            Action::Navigate(_) if self.form_open() => {}
            Action::Navigate(direction) => {
                self.dispatch(Intent::Navigate(direction));
                self.clamp_selected_day();
            }
            Action::OpenForm => {
                self.reset_input();
                self.form_category = self.default_category;
                self.dispatch(Intent::SelectDay(self.selected_day));
                self.message = format!("New event on {}", self.selected_date());
            }
            Action::ToggleDetails => {
                self.details_open = !self.details_open;
                self.active_focus = if self.details_open {
                    Focus::Details
                } else {
                    self.filter_open = false;
                    Focus::Grid
                };
                self.recalculate_list();
            }
            Action::ToggleFilter => {
                if !self.details_open {
                    self.details_open = true;
                    self.active_focus = Focus::Details;
                }
                self.filter_open = !self.filter_open;
            }
            Action::CycleFilter => {
                let next = self.store.filter().cycle();
                self.dispatch(Intent::SetFilter(next));
                self.list_state.select(Some(0));
                self.message = format!("Filter: {}", next);
            }
            Action::ToggleFocus => {
                self.active_focus = match self.active_focus {
                    Focus::Grid => Focus::Details,
                    Focus::Details => Focus::Grid,
                };
            }
            Action::ListNext => self.next(),
            Action::ListPrevious => self.previous(),
            Action::EditSelected => self.begin_edit(),
            Action::DeleteSelected => self.delete_selected(),
            Action::InputChar(c) => self.enter_char(c),
            Action::InputBackspace => self.delete_char(),
            Action::InputLeft => self.move_cursor_left(),
            Action::InputRight => self.move_cursor_right(),
            Action::ToggleCategory => self.form_category = self.form_category.toggled(),
            Action::Submit => self.submit(),
            Action::Cancel => {
                self.dispatch(Intent::CancelForm);
                self.reset_input();
                self.message = "Cancelled.".to_string();
            }
            Action::Quit => {}
        }
    }

    fn move_day(&mut self, delta: i64) {
        let Some(current) = self.selected_date().to_naive() else {
            return;
        };
        let target = current + Duration::days(delta);
        let cursor = self.store.cursor();
        let target_month = (target.year(), target.month());
        if target_month < (cursor.year, cursor.month) {
            self.dispatch(Intent::Navigate(Direction::Prev));
        } else if target_month > (cursor.year, cursor.month) {
            self.dispatch(Intent::Navigate(Direction::Next));
        }
        self.selected_day = target.day();
    }

    fn clamp_selected_day(&mut self) {
        let cursor = self.store.cursor();
        self.selected_day = self.selected_day.clamp(1, days_in_month(cursor.year, cursor.month));
    }

    fn begin_edit(&mut self) {
        let Some((date, index)) = self.get_selected_address() else {
            return;
        };
        let Some(record) = self.store.event_at(date, index).cloned() else {
            return;
        };
        self.dispatch(Intent::BeginEdit { date, index });
        self.input_buffer = record.description;
        self.cursor_position = self.input_buffer.chars().count();
        self.form_category = record.category;
        self.message = format!("Editing event on {}", date);
    }

    fn delete_selected(&mut self) {
        let Some((date, index)) = self.get_selected_address() else {
            return;
        };
        self.dispatch(Intent::DeleteEvent { date, index });
        self.recalculate_list();
        self.message = "Deleted.".to_string();
    }

    fn submit(&mut self) {
        let Some(selection) = self.store.selection() else {
            return;
        };
        let (description, tagged) = parse_smart_input(&self.input_buffer, &self.aliases);
        let category = tagged.unwrap_or(self.form_category);
        self.dispatch(Intent::SubmitEvent {
            date: selection.date,
            description,
            category,
            edit_index: selection.edit_index,
        });
        if self.form_open() {
            self.message = "Description cannot be empty.".to_string();
            return;
        }
        self.message = if selection.edit_index.is_some() {
            "Updated.".to_string()
        } else {
            "Added.".to_string()
        };
        self.reset_input();
        self.form_category = self.default_category;
        self.recalculate_list();
    }

    pub fn get_selected_address(&self) -> Option<(DateKey, usize)> {
        let view_idx = self.list_state.selected()?;
        self.listed_addresses().get(view_idx).copied()
    }

    pub fn recalculate_list(&mut self) {
        let len = self.store.listed().count();
        let sel = self.list_state.selected().unwrap_or(0);
        if len == 0 {
            self.list_state.select(Some(0));
        } else if sel >= len {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn next(&mut self) {
        let len = self.store.listed().count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.store.listed().count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.input_buffer.insert(index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }
}
