//! Configuration-backed implementation of the `LocationResolver` port
//!
//! The directory is immutable after construction: it is loaded once from a
//! JSON catalog file (or the built-in catalog) and injected wherever the
//! domain needs location constraints. The core never hardcodes locations.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use fulfilment_domain::location::{Location, LocationId, LocationResolver};

/// Failed to load the location catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read location catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse location catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only location directory resolving identifiers against a fixed catalog
#[derive(Clone)]
pub struct StaticLocationDirectory {
    locations: Arc<Vec<Location>>,
}

impl StaticLocationDirectory {
    pub fn new(locations: Vec<Location>) -> Self {
        info!(count = locations.len(), "initializing location directory");
        Self {
            locations: Arc::new(locations),
        }
    }

    /// Load the catalog from a JSON file: an array of
    /// `{ "identifier": ..., "max_number_of_warehouses": ..., "max_capacity": ... }`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let locations: Vec<Location> = serde_json::from_str(&raw)?;
        info!(path = %path.as_ref().display(), count = locations.len(), "loaded location catalog");
        Ok(Self::new(locations))
    }

    /// The catalog the fulfilment network ships with
    pub fn with_default_catalog() -> Self {
        Self::new(vec![
            Location::new("ZWOLLE-001", 1, 40),
            Location::new("ZWOLLE-002", 2, 50),
            Location::new("AMSTERDAM-001", 5, 100),
            Location::new("AMSTERDAM-002", 3, 75),
            Location::new("TILBURG-001", 1, 40),
            Location::new("HELMOND-001", 1, 45),
            Location::new("EINDHOVEN-001", 2, 70),
            Location::new("VETSBY-001", 1, 90),
        ])
    }
}

impl LocationResolver for StaticLocationDirectory {
    fn resolve_by_identifier(
        &self,
        identifier: &LocationId,
    ) -> impl Future<Output = Option<Location>> + Send {
        debug!(identifier = %identifier, "resolving location");
        let found = self
            .locations
            .iter()
            .find(|location| &location.identifier == identifier)
            .cloned();
        if found.is_none() {
            warn!(identifier = %identifier, "location not found in catalog");
        }
        async move { found }
    }
}
