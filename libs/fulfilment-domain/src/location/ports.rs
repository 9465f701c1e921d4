//! Port (trait definition) for the location directory
//!
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::location::entity::{Location, LocationId};

/// Port for resolving location identifiers against the location directory
///
/// The directory is read-only: implementations back it with configuration or
/// external storage, but never let the core create or mutate locations.
/// Absence of a location is not an error channel; the validator owns the
/// decision of what an unresolved identifier means.
pub trait LocationResolver: Send + Sync {
    /// Resolve a location identifier to its capacity constraints
    ///
    /// # Returns
    ///
    /// The `Location` for the identifier, or `None` if the directory does
    /// not know the identifier.
    fn resolve_by_identifier(
        &self,
        identifier: &LocationId,
    ) -> impl Future<Output = Option<Location>> + Send;
}
