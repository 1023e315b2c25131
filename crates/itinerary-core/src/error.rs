//! Error Types
//!
//! Every failure the core can report. None of them leave the document
//! half-edited: edits validate indices before touching anything.

use thiserror::Error;

/// Key-value backend failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend refused the write because it is full
    #[error("storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },
    /// No storage is reachable (private mode, disabled, non-browser)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Anything else the backend reported
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A positional edit addressed something that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("day {index} out of range (len {len})")]
    Day { index: usize, len: usize },
    #[error("activity {index} out of range (len {len})")]
    Activity { index: usize, len: usize },
    #[error("sub item {index} out of range (len {len})")]
    SubItem { index: usize, len: usize },
    #[error("section {index} out of range (len {len})")]
    Section { index: usize, len: usize },
    #[error("section item {index} out of range (len {len})")]
    SectionItem { index: usize, len: usize },
}

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize itinerary: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Export failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("no content to export")]
    NothingToExport,
}

pub type StoreResult<T> = Result<T, StoreError>;
