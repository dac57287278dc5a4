use crate::config::LogConfig;
use anyhow::Context;
use simplelog::WriteLogger;
use std::path::{Path, PathBuf};

/// Return the default log file path
fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
}

/// Decide where log messages should go: `override_path` if given, else the
/// configured file, else the default path.  Returns `None` if logging is
/// disabled or there is nowhere to log to.
pub(crate) fn log_path(config: &LogConfig, override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = override_path {
        Some(p.to_path_buf())
    } else if !config.enabled {
        None
    } else {
        config.file.clone().or_else(default_log_path)
    }
}

/// Set up logging to a file.  The terminal belongs to the game, so nothing is
/// ever logged to stderr.
pub(crate) fn init(config: &LogConfig, override_path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_path(config, override_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = open_log_file(&path)?;
    WriteLogger::init(config.level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

/// Open the log file for appending, creating it if necessary.  Messages from
/// earlier runs are kept.
fn open_log_file(path: &Path) -> std::io::Result<fs_err::File> {
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
