//! Error types for persisted state operations.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures while loading or saving persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A state file exists but does not parse. Surfaced rather than silently
    /// resetting the user's data.
    #[error("corrupt state file '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A state file was written by a newer schema than this build knows.
    #[error("state file '{key}' has schema version {found}, supported version is {supported}")]
    UnsupportedVersion {
        key: String,
        found: u32,
        supported: u32,
    },

    /// Serializing state for writing failed.
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),

    /// No platform profile directory is available.
    #[error("no profile directory available on this platform")]
    NoProfileDir,
}
