//! Error types for the window core
//!
//! Every error here is local and recoverable. `NotFound` in particular is
//! expected from UI races (a click on a window that was closed a frame
//! earlier) and callers usually treat it as a no-op.

use crate::window::WindowId;

/// Errors raised by window registry operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// The operation referenced a window that is not in the registry.
    #[error("window not found: {0}")]
    NotFound(WindowId),

    /// A window with this id already exists.
    #[error("duplicate window id: {0}")]
    DuplicateId(WindowId),

    /// Window ids must be non-empty.
    #[error("window id must not be empty")]
    InvalidId,

    /// A coordinate or dimension was negative or not finite.
    #[error("invalid geometry: {field} = {value}")]
    InvalidGeometry {
        /// Which field was rejected (`x`, `y`, `width`, `height`, ...)
        field: &'static str,
        /// The offending value
        value: f32,
    },
}

impl WindowError {
    /// True for the not-found case that callers treat as a no-op.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, WindowError::NotFound(_))
    }
}

/// Errors raised while saving or restoring registry state.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Blob is not valid JSON or does not match the snapshot layout.
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Blob was written by a newer build.
    #[error("unsupported snapshot version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the blob
        found: u32,
        /// Highest version this build reads
        supported: u32,
    },

    /// The stored window list contains the same id twice.
    #[error("snapshot contains duplicate window id: {0}")]
    DuplicateId(WindowId),

    /// The stored window list contains an invalid record.
    #[error("snapshot contains invalid window: {0}")]
    InvalidWindow(#[from] WindowError),

    /// The backing storage failed.
    #[error("storage error: {0}")]
    Storage(String),
}
