//! Port (trait definition) for warehouse record storage
//!
//! This module defines the contract the persistence adapter must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::location::LocationId;
use crate::warehouse::entity::Warehouse;
use crate::warehouse::error::WarehouseError;
use crate::warehouse::ids::BusinessUnitCode;

/// Port for durable storage of warehouse records
///
/// The store is the sole writer of persisted state; the validator and the use
/// cases operate on transient copies and communicate outcomes back through
/// these calls.
///
/// ## Consistency contract
///
/// The use cases run a read-then-decide sequence (fetch siblings, compute
/// aggregates, compare against thresholds) before mutating. Implementations
/// must provide serializability per business-unit-code and per-location
/// aggregate - a transactional read-modify-write boundary or an equivalent
/// lock - so that two concurrent admissions at a nearly-full location cannot
/// both pass the capacity rules and both persist. `create` must refuse a
/// second active record under an already-active code.
pub trait WarehouseStore: Send + Sync {
    /// Find the currently-active record under a business unit code
    ///
    /// Returns `None` when no *active* record exists, regardless of archived
    /// history under the same code.
    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> impl Future<Output = Result<Option<Warehouse>, WarehouseError>> + Send;

    /// Find the most recent record under a business unit code in any state
    ///
    /// Supports the uniqueness rule that codes are never reused: creation
    /// must see a code that only exists archived.
    fn find_any_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> impl Future<Output = Result<Option<Warehouse>, WarehouseError>> + Send;

    /// All records bound to a location, active and archived
    ///
    /// Callers filter by lifecycle state themselves.
    fn find_by_location(
        &self,
        location: &LocationId,
    ) -> impl Future<Output = Result<Vec<Warehouse>, WarehouseError>> + Send;

    /// All currently-active records
    fn get_all(&self) -> impl Future<Output = Result<Vec<Warehouse>, WarehouseError>> + Send;

    /// Persist a new record
    ///
    /// # Errors
    ///
    /// `WarehouseError::BusinessUnitCodeInUse` when an active record already
    /// exists under the candidate's code.
    fn create(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send;

    /// Rewrite the stored record under the warehouse's code
    fn update(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send;

    /// Soft-delete: mark the active record under this warehouse's code
    /// archived at the current time
    ///
    /// No other field changes.
    fn remove(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send;
}
