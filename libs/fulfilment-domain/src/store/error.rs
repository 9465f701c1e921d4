//! Domain errors for retail store operations

use thiserror::Error;

use crate::store::entity::StoreId;

/// Errors that can occur while managing retail stores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store name was missing or blank
    #[error("store name was not set")]
    NameNotSet,

    /// No store exists under this identifier
    #[error("store not found: {0}")]
    NotFound(StoreId),

    /// The repository backend failed
    #[error("store repository operation failed: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Result type alias for retail store operations
pub type Result<T> = std::result::Result<T, StoreError>;
