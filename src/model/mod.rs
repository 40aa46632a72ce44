// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod date;
pub mod grid;
pub mod item;
pub mod parser;

pub use date::{Cursor, DateKey};
pub use grid::{GridCell, day_grid, days_in_month, first_weekday, month_label};
pub use item::{Category, EventRecord, Filter};
