//! Error types for fetcher-engine

use fetcher_model::Category;

use crate::coordinator::Phase;

/// Result type for fetcher-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fetcher-engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A category's replace-in-place pass failed; its backup is retained
    /// under the temp directory.
    #[error("{category}: {phase} failed: {source}")]
    Category {
        category: Category,
        phase: Phase,
        #[source]
        source: fetcher_fs::Error,
    },

    /// A category was enabled in the plan but the payload did not carry its
    /// group.
    #[error("{category}: payload does not contain this group")]
    MissingGroup { category: Category },

    /// Filesystem error from fetcher-fs
    #[error(transparent)]
    Fs(#[from] fetcher_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
