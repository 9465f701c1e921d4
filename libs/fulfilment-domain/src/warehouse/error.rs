//! Domain errors for warehouse operations
//!
//! This module defines all rejections the allocation rules and use cases can
//! produce. These are domain-level errors that abstract away infrastructure
//! details; none of them is retried internally, and every rejection prevents
//! the corresponding store mutation from happening.

use thiserror::Error;

use crate::location::LocationId;
use crate::warehouse::ids::BusinessUnitCode;

/// Rejections produced by the warehouse allocation rules and use cases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WarehouseError {
    /// The referenced warehouse record is already archived and must never be
    /// mutated, replaced, or re-archived
    #[error("warehouse is already archived")]
    AlreadyArchived,

    /// The candidate references a location the directory does not know
    #[error("invalid location: {0}")]
    InvalidLocation(LocationId),

    /// The location already hosts its maximum number of active units
    #[error("maximum number of warehouses reached for location {0}")]
    MaxWarehousesReached(LocationId),

    /// Admitting the candidate would exceed the location's aggregate capacity
    #[error("maximum capacity reached for location {0}")]
    MaxCapacityReached(LocationId),

    /// The candidate holds more stock than it has room for
    #[error("stock ({stock}) cannot exceed warehouse capacity ({capacity})")]
    StockExceedsCapacity { stock: u32, capacity: u32 },

    /// On replacement, the new capacity is too small for the stock carried
    /// over from the predecessor
    #[error("new capacity ({capacity}) cannot accommodate old stock ({stock})")]
    CannotAccommodateStock { capacity: u32, stock: u32 },

    /// On replacement, the new record's stock must equal the old stock
    #[error("stock of new warehouse ({actual}) must match old stock ({expected})")]
    StockMismatch { expected: u32, actual: u32 },

    /// A record under this business unit code already exists; codes are
    /// never reused, not even after archival
    #[error("warehouse with business unit code {0} already exists")]
    BusinessUnitCodeInUse(BusinessUnitCode),

    /// No active record exists under the code a replacement targets
    #[error("warehouse to replace not found: {0}")]
    ReplacementNotFound(BusinessUnitCode),

    /// No record exists under this code
    #[error("warehouse not found: {0}")]
    NotFound(BusinessUnitCode),

    /// The store backend failed
    #[error("store operation failed: {0}")]
    Storage(String),
}

impl WarehouseError {
    /// Create a storage failure error with a message
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Result type alias for warehouse operations
pub type Result<T> = std::result::Result<T, WarehouseError>;
