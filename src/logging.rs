// File: ./src/logging.rs
//! File-based logging.
//!
//! The terminal belongs to the TUI, so diagnostics only ever go to rolling
//! files under the data directory. Initialization happens at most once per
//! process; later calls with the same directory are no-ops.
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "calpad";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

pub fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "calpad", "calpad").map(|proj| proj.data_dir().join("logs"))
}

/// Starts the file logger. Returns the directory logs are written to.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<PathBuf> {
    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir != log_dir {
            bail!(
                "logging already initialized at {}; refusing to switch to {}",
                state.log_dir.display(),
                log_dir.display()
            );
        }
        return Ok(state.log_dir.clone());
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

        let logger = Logger::try_with_str(level)
            .with_context(|| format!("invalid log level `{}`", level))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .context("failed to start logger")?;

        install_panic_hook();

        info!(
            "event=app_start status=ok version={} level={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    Ok(state.log_dir.clone())
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!("event=panic location={} message={}", location, info);
        log::logger().flush();
        previous(info);
    }));
}
