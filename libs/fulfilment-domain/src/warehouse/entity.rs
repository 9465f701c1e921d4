//! Domain entity for warehouse units
//!
//! A Warehouse represents one fulfilment unit bound to a location. Records
//! are append-only from the store's point of view: replacement archives the
//! old record and creates a new one under the same business unit code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::location::LocationId;
use crate::warehouse::ids::BusinessUnitCode;

/// Lifecycle state of a warehouse unit
///
/// Archival is terminal: no transition returns a record from `Archived`
/// back to `Active`. An archived unit is logically deleted and excluded
/// from every aggregate the allocation rules compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseState {
    Active,
    Archived { at: DateTime<Utc> },
}

/// A warehouse unit bound to a fulfilment location
///
/// Invariants the allocation rules keep for every *active* unit:
/// - `stock <= capacity`
/// - per location, active unit count and summed capacity stay within the
///   location's ceilings
///
/// # Example
///
/// ```rust
/// use fulfilment_domain::warehouse::Warehouse;
///
/// let unit = Warehouse::new("MWH.001", "ZWOLLE-001", 40, 10);
/// assert!(unit.is_active());
/// assert_eq!(unit.capacity(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Externally visible unique identifier, immutable once persisted
    business_unit_code: BusinessUnitCode,

    /// Location this unit is bound to; changes only via replacement
    location: LocationId,

    /// Maximum holding of the unit
    capacity: u32,

    /// Current quantity held
    stock: u32,

    /// Timestamp stamped once when the record is constructed
    created_at: DateTime<Utc>,

    /// Lifecycle state
    state: WarehouseState,
}

impl Warehouse {
    /// Create a new active warehouse unit
    ///
    /// This is a pure domain constructor - it doesn't perform any I/O and
    /// runs no allocation rules. The creation timestamp is stamped here.
    pub fn new(
        business_unit_code: impl Into<BusinessUnitCode>,
        location: impl Into<LocationId>,
        capacity: u32,
        stock: u32,
    ) -> Self {
        Self {
            business_unit_code: business_unit_code.into(),
            location: location.into(),
            capacity,
            stock,
            created_at: Utc::now(),
            state: WarehouseState::Active,
        }
    }

    /// Create a Warehouse with explicit values (used for reconstruction)
    pub fn from_parts(
        business_unit_code: BusinessUnitCode,
        location: LocationId,
        capacity: u32,
        stock: u32,
        created_at: DateTime<Utc>,
        state: WarehouseState,
    ) -> Self {
        Self {
            business_unit_code,
            location,
            capacity,
            stock,
            created_at,
            state,
        }
    }

    pub fn business_unit_code(&self) -> &BusinessUnitCode {
        &self.business_unit_code
    }

    pub fn location(&self) -> &LocationId {
        &self.location
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn state(&self) -> &WarehouseState {
        &self.state
    }

    /// Whether this record is the active unit for its code
    pub fn is_active(&self) -> bool {
        matches!(self.state, WarehouseState::Active)
    }

    /// The archival timestamp, or `None` while the unit is active
    pub fn archived_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            WarehouseState::Active => None,
            WarehouseState::Archived { at } => Some(at),
        }
    }

    /// Mark this record archived at the given instant
    ///
    /// Callers are responsible for rejecting re-archival; this setter does
    /// not guard the transition.
    pub fn archive(&mut self, at: DateTime<Utc>) {
        self.state = WarehouseState::Archived { at };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_warehouse_is_active() {
        let unit = Warehouse::new("MWH.001", "ZWOLLE-001", 40, 10);

        assert!(unit.is_active());
        assert!(unit.archived_at().is_none());
        assert_eq!(unit.business_unit_code().as_str(), "MWH.001");
        assert_eq!(unit.location().as_str(), "ZWOLLE-001");
        assert_eq!(unit.capacity(), 40);
        assert_eq!(unit.stock(), 10);
    }

    #[test]
    fn test_archive_sets_timestamp() {
        let mut unit = Warehouse::new("MWH.001", "ZWOLLE-001", 40, 10);
        let at = Utc::now();

        unit.archive(at);

        assert!(!unit.is_active());
        assert_eq!(unit.archived_at(), Some(at));
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let created = Utc::now();
        let unit = Warehouse::from_parts(
            BusinessUnitCode::from("MWH.023"),
            LocationId::from("TILBURG-001"),
            40,
            25,
            created,
            WarehouseState::Active,
        );

        assert_eq!(unit.created_at(), &created);
        assert_eq!(unit.stock(), 25);
        assert!(unit.is_active());
    }

    #[test]
    fn test_business_unit_code_display() {
        let code = BusinessUnitCode::from("MWH.012");
        assert_eq!(format!("{}", code), "MWH.012");
    }
}
