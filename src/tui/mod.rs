pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::logging;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

pub fn run() -> Result<()> {
    // Config errors are reported but not fatal; the calendar works with defaults.
    let (config, config_error) = match Config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };

    match logging::default_log_dir() {
        Some(dir) => {
            if let Err(e) = logging::init_logging(&config.log_level, &dir) {
                eprintln!("Warning: logging disabled: {:#}", e);
            }
        }
        None => eprintln!("Warning: no data directory found, logging disabled"),
    }
    if let Some(e) = &config_error {
        warn!("event=config_load status=error error={:#}", e);
    }

    // Panic Hook: leave the alternate screen before the default report is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(&config);
    if let Some(e) = config_error {
        app_state.message = format!("Config error, using defaults: {}", e);
    }

    let res = event_loop(&mut terminal, &mut app_state);

    restore_terminal()?;
    terminal.show_cursor()?;
    info!("event=app_exit status={}", if res.is_ok() { "ok" } else { "error" });
    res
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, app_state))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app_state.action_for_key(key.code),
            Event::Mouse(mouse_event) => app_state.action_for_mouse(mouse_event.kind),
            _ => None,
        };

        match action {
            Some(Action::Quit) => break,
            Some(action) => app_state.apply(action),
            None => {}
        }
    }
    Ok(())
}
