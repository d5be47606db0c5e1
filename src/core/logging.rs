//! Log setup for the terminal host.
//!
//! The TUI owns stdout/stderr while a game is running, so log records go to
//! a file instead. The filter is read from `SKYFLAP_LOG` (default `info`).

use crate::core::constants::{LOG_FILE_NAME, LOG_FILTER_ENV};
use directories::ProjectDirs;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Default log file location inside the platform data directory.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "skyflap").map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Route `log` records to `path`, appending.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().filter_or(LOG_FILTER_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
