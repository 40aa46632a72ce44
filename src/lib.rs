pub mod config;
pub mod logging;
pub mod model;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
