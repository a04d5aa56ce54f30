use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`debug`, `listbox=trace`, ...)
pub const LOG_ENV: &str = "LISTBOX_LOG";

/// Default log file: `<cache_dir>/listbox/listbox.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("listbox").join("listbox.log"))
}

/// Send tracing output to `path`; the terminal itself belongs to the UI
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create log directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Could not create log file: {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
