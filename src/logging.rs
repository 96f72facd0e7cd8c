use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "REFLEKS_LOG";

pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("refleks")
        .join("refleks.log")
}

/// Route `log` records to a file. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub fn init(filter: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::new()
        .parse_filters(filter)
        .parse_env(LOG_ENV)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}
