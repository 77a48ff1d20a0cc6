//! Logging setup and the in-memory log buffer behind the logs dialog.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use once_cell::sync::Lazy;

use crate::config::LoggingConfig;

/// Shared in-memory logger that backs the logs dialog.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

static GLOBAL: Lazy<Logger> = Lazy::new(|| Logger {
    logs: Arc::new(Mutex::new(Vec::new())),
});

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Process-wide logger instance shared by all components.
    pub fn global() -> Logger {
        GLOBAL.clone()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{timestamp}] {message}");

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialise the `log` facade with a fern file logger.
///
/// Logging to stdout would corrupt the alternate screen, so everything goes
/// to a file under the XDG data directory. Disabled logging installs nothing
/// and the `log` macros become no-ops.
pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_path = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
        .join("alkaa")
        .join("alkaa.log");

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(log_path)?)
        .apply()?;

    Ok(())
}
