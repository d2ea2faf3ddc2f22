//! AppMessage enum for async communication within the application.

use std::path::PathBuf;

use crate::error::{ExportError, FetchError};

/// Messages received from spawned tasks (verse fetches, card export).
///
/// Fetch messages carry the request token they were issued under; results
/// from a superseded request are discarded by the handler.
#[derive(Debug)]
pub enum AppMessage {
    /// Source text fetch resolved.
    SourceLoaded { token: u64, text: String },
    /// Translation text fetch resolved.
    TranslationLoaded { token: u64, text: String },
    /// Either fetch failed; prior text is left untouched.
    FetchFailed { token: u64, error: FetchError },
    /// Card export finished and the file was written.
    ExportFinished { path: PathBuf },
    /// Card export failed.
    ExportFailed { error: ExportError },
}
