//! Tracing setup.
//!
//! Stdout belongs to the TUI, so log lines go to a file under the platform
//! data directory. Verbosity comes from `AYAH_CARD_LOG` (standard
//! `EnvFilter` syntax), defaulting to `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "AYAH_CARD_LOG";

/// Path of the log file, or `None` if the data dir cannot be determined.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("ayah-card").join("ayah-card.log"))
}

/// Install the global tracing subscriber writing to the log file.
///
/// If the data directory is unavailable, logging is silently skipped: the
/// app is fully usable without it.
pub fn init() -> Result<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
