//! Error types for verse fetching and card export.
//!
//! Fetch errors are handled at the point of the call and converted into a
//! user-visible notice; nothing here is fatal. `user_message()` provides the
//! text shown in the notice line, kept separate from the `Display` impl used
//! for logs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the remote verse service.
///
/// `reqwest::Error` is flattened to a string so these stay `Clone` and can
/// travel through the app message channel.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The service answered with a non-success HTTP status.
    #[error("verse service rejected the request (HTTP {status})")]
    RemoteRejected { status: u16 },

    /// The request never completed (DNS, connect, TLS, ...).
    #[error("network failure: {0}")]
    Network(String),

    /// The response body did not match the expected `{ data: { text } }`
    /// envelope.
    #[error("malformed verse payload: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// User-facing message for the notice line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::RemoteRejected { status } => match *status {
                404 => "That verse was not found. Check the surah and ayah numbers.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The verse service is having trouble. Please try again later.".to_string()
                }
                s => format!("The verse service returned an error (HTTP {}).", s),
            },
            FetchError::Network(_) => {
                "Unable to reach the verse service. Check your connection.".to_string()
            }
            FetchError::InvalidResponse(_) => {
                "The verse service sent an unexpected response.".to_string()
            }
        }
    }
}

/// Errors from rasterizing or saving a card image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No usable TTF could be located on this system.
    #[error("no usable font found (searched common system font paths)")]
    FontUnavailable,

    /// Fetching the background image failed.
    #[error("background image fetch failed: {0}")]
    Background(String),

    /// A color field did not parse as `#RRGGBB`.
    #[error("invalid color literal: {0}")]
    Color(String),

    /// PNG encode failed.
    #[error("image encode failed: {0}")]
    Encode(String),

    /// Writing the output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// User-facing message for the notice line.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::FontUnavailable => {
                "Export needs a TTF font installed (DejaVu, Liberation or Noto).".to_string()
            }
            ExportError::Background(_) => {
                "Could not download the background image. Check your connection.".to_string()
            }
            ExportError::Color(c) => format!("Color {} is not a valid #RRGGBB value.", c),
            ExportError::Encode(_) => "Encoding the card image failed.".to_string(),
            ExportError::Write { path, .. } => {
                format!("Could not save the image to {}.", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_user_messages() {
        let not_found = FetchError::RemoteRejected { status: 404 };
        assert!(not_found.user_message().contains("not found"));

        let server = FetchError::RemoteRejected { status: 503 };
        assert!(server.user_message().contains("try again later"));

        let other = FetchError::RemoteRejected { status: 418 };
        assert!(other.user_message().contains("418"));

        let net = FetchError::Network("dns".into());
        assert!(net.user_message().contains("connection"));
    }

    #[test]
    fn test_fetch_error_is_clone() {
        let err = FetchError::InvalidResponse("missing data.text".into());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_export_error_display() {
        let err = ExportError::Color("#GGHHII".into());
        assert!(err.to_string().contains("#GGHHII"));
        assert!(err.user_message().contains("#RRGGBB"));
    }
}
