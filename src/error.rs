//! Error types for loading hosts sources.

use std::path::PathBuf;
use thiserror::Error;

/// Failures at the I/O boundary. Unparseable lines are never reported here.
#[derive(Error, Debug)]
pub enum HostsError {
    /// The hosts file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source looked like a URL but did not parse as one.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure or timeout while fetching a URL.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Clipboard unavailable or not holding text.
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

pub type Result<T> = std::result::Result<T, HostsError>;
