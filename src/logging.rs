//! Logging setup.
//!
//! Combined terminal/file logging: warnings and errors reach the terminal so
//! they interleave with shell output, while the file log records everything
//! at the configured level with RFC3339 timestamps. The file is rotated by
//! size with a timestamp suffix.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum level recorded in the file.
    pub level: LevelFilter,
    /// Rotate when the file grows past this many bytes (0 disables).
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pwvault.log"),
            level: LevelFilter::Info,
            max_size: 5 * 1024 * 1024,
        }
    }
}

impl LogConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Initializes the global logger. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if config.max_size > 0 && config.path.exists() {
        if let Ok(metadata) = std::fs::metadata(&config.path) {
            if metadata.len() > config.max_size {
                rotate_log(&config.path)?;
            }
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file: {}", e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![WriteLogger::new(
        config.level,
        file_config,
        log_file,
    )];

    // Terminal logger only when attached to one, and only for warnings.
    if std::env::var("TERM").is_ok() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    Ok(())
}

/// Renames the current log file with a timestamp suffix.
fn rotate_log(path: &PathBuf) -> Result<()> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let rotated = path.with_file_name(format!(
        "{}.{}",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("pwvault.log"),
        timestamp
    ));
    std::fs::rename(path, &rotated)?;
    log::info!("Rotated log file to {}", rotated.display());
    Ok(())
}

/// Runs `f`, logging how long it took at debug level.
#[allow(unused)]
pub fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let start = std::time::Instant::now();
    let result = f();
    log::debug!("{} completed in {:?}", operation, start.elapsed());
    result
}
