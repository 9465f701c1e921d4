//! Warehouse use cases - business logic orchestration
//!
//! The service coordinates the warehouse store, the location directory, and
//! the allocation rules. It owns exactly the orchestration the rules do not:
//! uniqueness of business unit codes, existence of a replacement target, and
//! the archive-then-create swap. Rules already owned by the validator are
//! never re-derived here.

use tracing::{error, info};

use crate::location::LocationResolver;
use crate::warehouse::entity::Warehouse;
use crate::warehouse::error::{Result, WarehouseError};
use crate::warehouse::ids::BusinessUnitCode;
use crate::warehouse::ports::WarehouseStore;
use crate::warehouse::validator::WarehouseValidator;

/// Service exposing the warehouse operations to the boundary
///
/// Generic over any `WarehouseStore` / `LocationResolver` pair; the compiler
/// generates specialized versions for each concrete adapter, resulting in
/// zero-cost abstractions. The validator is an injected collaborator, not a
/// base class: one rule set, parameterized by the resolved location.
pub struct WarehouseService<S, L> {
    store: S,
    validator: WarehouseValidator<S, L>,
}

impl<S, L> WarehouseService<S, L>
where
    S: WarehouseStore + Clone,
    L: LocationResolver,
{
    pub fn new(store: S, locations: L) -> Self {
        Self {
            validator: WarehouseValidator::new(store.clone(), locations),
            store,
        }
    }

    /// Create a brand-new warehouse unit
    ///
    /// Business unit codes are never reused: a code that exists under any
    /// lifecycle state, archived included, rejects the candidate. The
    /// allocation rules then run with no predecessor; any rejection is
    /// propagated unchanged and nothing is persisted.
    pub async fn create(&self, candidate: Warehouse) -> Result<Warehouse> {
        if self
            .store
            .find_any_by_business_unit_code(candidate.business_unit_code())
            .await?
            .is_some()
        {
            return Err(WarehouseError::BusinessUnitCodeInUse(
                candidate.business_unit_code().clone(),
            ));
        }

        self.validator.validate(&candidate, None).await?;

        self.store.create(&candidate).await?;
        info!(code = %candidate.business_unit_code(), location = %candidate.location(), "warehouse unit created");
        Ok(candidate)
    }

    /// Replace the warehouse unit under the candidate's code
    ///
    /// The predecessor is looked up in any lifecycle state so that targeting
    /// an archived unit surfaces the archival conflict rather than a generic
    /// not-found. The swap archives the old record and creates the candidate
    /// as a new record under the same code, as one logical unit: if creation
    /// fails after archival succeeded, the predecessor is rolled back to
    /// active so the code is never left without an active unit.
    pub async fn replace(&self, candidate: Warehouse) -> Result<Warehouse> {
        let previous = self
            .store
            .find_any_by_business_unit_code(candidate.business_unit_code())
            .await?
            .ok_or_else(|| {
                WarehouseError::ReplacementNotFound(candidate.business_unit_code().clone())
            })?;

        self.validator.validate(&candidate, Some(&previous)).await?;

        self.store.remove(&previous).await?;
        if let Err(create_err) = self.store.create(&candidate).await {
            // compensating rollback: restore the predecessor's active copy
            if let Err(rollback_err) = self.store.update(&previous).await {
                error!(
                    code = %previous.business_unit_code(),
                    error = %rollback_err,
                    "failed to roll back archival after aborted replacement"
                );
            }
            return Err(create_err);
        }

        info!(code = %candidate.business_unit_code(), location = %candidate.location(), "warehouse unit replaced");
        Ok(candidate)
    }

    /// Archive a warehouse unit
    ///
    /// Archival is terminal; an already-archived target is rejected before
    /// the store is touched. On success exactly one record transitions from
    /// active to archived, stamped by the store with the current time.
    pub async fn archive(&self, target: &Warehouse) -> Result<()> {
        self.validator.validate_not_archived(target)?;

        self.store.remove(target).await?;
        info!(code = %target.business_unit_code(), "warehouse unit archived");
        Ok(())
    }

    /// The currently-active record under a code, if any
    pub async fn find(&self, code: &BusinessUnitCode) -> Result<Option<Warehouse>> {
        self.store.find_by_business_unit_code(code).await
    }

    /// The most recent record under a code in any lifecycle state
    pub async fn find_any(&self, code: &BusinessUnitCode) -> Result<Option<Warehouse>> {
        self.store.find_any_by_business_unit_code(code).await
    }

    /// All active warehouse units
    pub async fn list(&self) -> Result<Vec<Warehouse>> {
        self.store.get_all().await
    }
}
