//! Error types of the core. None of them is fatal: action errors abort a single action and are
//! shown to the user, storage errors are logged and replaced with fallback state.

use thiserror::Error;

/// Rejections of a single user action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Category name was blank after trimming.
    #[error("category name is empty")]
    EmptyInput,

    #[error("category {0:?} already exists")]
    DuplicateCategory(String),

    /// The store holds no entries at all.
    #[error("there is no data to export")]
    NoDataToExport,
}

/// Failures of the persistence provider.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored value isn't valid JSON of the expected shape.
    #[error("stored value under {key} is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
