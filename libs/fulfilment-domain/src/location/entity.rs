//! Location domain values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a fulfilment location (e.g. `ZWOLLE-001`)
///
/// LocationId is a wrapper around the externally assigned site key to provide
/// type safety and prevent mixing up location identifiers with other strings
/// in the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(identifier: &str) -> Self {
        Self(identifier.to_string())
    }
}

impl From<String> for LocationId {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}

/// Static capacity constraints of a fulfilment location
///
/// Locations are supplied by an external directory and never created or
/// mutated by this subsystem. Both ceilings apply to *active* warehouse
/// units only; archived units do not occupy a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique site key
    pub identifier: LocationId,

    /// Ceiling on concurrently active warehouse units at this location
    pub max_number_of_warehouses: u32,

    /// Ceiling on the summed capacity of active warehouse units here
    pub max_capacity: u32,
}

impl Location {
    pub fn new(
        identifier: impl Into<LocationId>,
        max_number_of_warehouses: u32,
        max_capacity: u32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            max_number_of_warehouses,
            max_capacity,
        }
    }
}
