//! Shared error types for store backends

use thiserror::Error;

/// Failure inside a catalog or profile store backend
///
/// Store errors are always wrapped with context and rethrown; they are
/// never swallowed or downgraded to an empty result.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store query failed: {context}: {message}")]
    QueryFailed { context: String, message: String },

    #[error("Store document malformed: {context}: {source}")]
    MalformedDocument {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn query(context: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::QueryFailed {
            context: context.into(),
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
