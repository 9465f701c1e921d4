//! Warehouse allocation rules
//!
//! The validator is the single owner of the cross-cutting admission rules:
//! given a candidate unit and an optional predecessor being replaced, it
//! approves or rejects the candidate against the location's ceilings and the
//! warehouse-local invariants. It never persists anything; it only reads
//! through its collaborator ports.

use tracing::warn;

use crate::location::{Location, LocationResolver};
use crate::warehouse::entity::Warehouse;
use crate::warehouse::error::{Result, WarehouseError};
use crate::warehouse::ports::WarehouseStore;

/// Decides whether a proposed warehouse unit is admissible
///
/// Rules run in a fixed order and short-circuit: the first failing rule
/// determines the rejection. Archival conflicts and location validity are
/// checked before any aggregate math so the caller gets the most precise
/// error first.
///
/// One validator, parameterized by the resolved location's thresholds -
/// location kinds are data, not a type hierarchy.
pub struct WarehouseValidator<S, L> {
    store: S,
    locations: L,
}

impl<S, L> WarehouseValidator<S, L>
where
    S: WarehouseStore,
    L: LocationResolver,
{
    pub fn new(store: S, locations: L) -> Self {
        Self { store, locations }
    }

    /// Validate a candidate unit, optionally superseding `being_replaced`
    ///
    /// `being_replaced`, when present, is the currently-active record the
    /// candidate would supersede under the same business unit code. Rules,
    /// in order:
    ///
    /// 1. a replaced predecessor must not be archived
    /// 2. the candidate's location must resolve
    /// 3. the location's active-unit count ceiling holds (skipped for a
    ///    same-location replacement, which never changes occupancy)
    /// 4. the location's aggregate capacity ceiling holds, with the record
    ///    being replaced excluded from the running total since it is about
    ///    to be removed
    /// 5. the candidate's stock fits its capacity
    /// 6. on replacement, the new capacity accommodates the old stock and
    ///    the new stock equals the old stock
    pub async fn validate(
        &self,
        candidate: &Warehouse,
        being_replaced: Option<&Warehouse>,
    ) -> Result<()> {
        if let Some(previous) = being_replaced {
            self.validate_not_archived(previous)?;
        }

        let location = self.resolve_location(candidate).await?;

        let siblings = self.store.find_by_location(candidate.location()).await?;

        // A same-location replacement never changes occupancy count, so the
        // ceiling only applies to brand-new units and cross-location moves.
        let same_location_replacement =
            being_replaced.is_some_and(|previous| previous.location() == candidate.location());
        if !same_location_replacement {
            let active_count = siblings.iter().filter(|w| w.is_active()).count() as u32;
            if active_count >= location.max_number_of_warehouses {
                warn!(location = %candidate.location(), "maximum number of warehouses reached");
                return Err(WarehouseError::MaxWarehousesReached(
                    candidate.location().clone(),
                ));
            }
        }

        // The record being replaced is about to be removed, so it must not be
        // double-counted against the aggregate - whatever location list it
        // came from. Sums run in u64 so summed u32 capacities cannot wrap.
        let current_capacity: u64 = siblings
            .iter()
            .filter(|w| w.is_active())
            .filter(|w| {
                being_replaced
                    .map_or(true, |previous| w.business_unit_code() != previous.business_unit_code())
            })
            .map(|w| u64::from(w.capacity()))
            .sum();
        if current_capacity + u64::from(candidate.capacity()) > u64::from(location.max_capacity) {
            warn!(location = %candidate.location(), "maximum capacity reached");
            return Err(WarehouseError::MaxCapacityReached(
                candidate.location().clone(),
            ));
        }

        if candidate.stock() > candidate.capacity() {
            warn!(code = %candidate.business_unit_code(), "stock exceeds capacity");
            return Err(WarehouseError::StockExceedsCapacity {
                stock: candidate.stock(),
                capacity: candidate.capacity(),
            });
        }

        if let Some(previous) = being_replaced {
            if candidate.capacity() < previous.stock() {
                warn!(code = %candidate.business_unit_code(), "new capacity cannot accommodate old stock");
                return Err(WarehouseError::CannotAccommodateStock {
                    capacity: candidate.capacity(),
                    stock: previous.stock(),
                });
            }

            if candidate.stock() != previous.stock() {
                warn!(code = %candidate.business_unit_code(), "stock does not match old stock");
                return Err(WarehouseError::StockMismatch {
                    expected: previous.stock(),
                    actual: candidate.stock(),
                });
            }
        }

        Ok(())
    }

    /// Reject any operation targeting an archived record
    pub fn validate_not_archived(&self, warehouse: &Warehouse) -> Result<()> {
        if warehouse.archived_at().is_some() {
            warn!(code = %warehouse.business_unit_code(), "warehouse already archived");
            return Err(WarehouseError::AlreadyArchived);
        }
        Ok(())
    }

    async fn resolve_location(&self, candidate: &Warehouse) -> Result<Location> {
        match self
            .locations
            .resolve_by_identifier(candidate.location())
            .await
        {
            Some(location) => Ok(location),
            None => {
                warn!(location = %candidate.location(), "invalid location");
                Err(WarehouseError::InvalidLocation(candidate.location().clone()))
            }
        }
    }
}
