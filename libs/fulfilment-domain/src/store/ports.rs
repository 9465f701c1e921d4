//! Ports (trait definitions) for retail store collaborators
//!
//! Same static-dispatch convention as the warehouse ports: native async
//! traits with `impl Future` return types.

use std::future::Future;

use crate::store::entity::{Store, StoreId};
use crate::store::error::StoreError;

/// Port for durable storage of retail store records
pub trait StoreRepository: Send + Sync {
    /// All stores, ordered by name
    fn list_all(&self) -> impl Future<Output = Result<Vec<Store>, StoreError>> + Send;

    fn find_by_id(
        &self,
        id: &StoreId,
    ) -> impl Future<Output = Result<Option<Store>, StoreError>> + Send;

    fn create(&self, store: &Store) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn update(&self, store: &Store) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn delete(&self, id: &StoreId) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Port for notifying the legacy store manager after a committed mutation
///
/// Notifications are fire-and-forget: implementations log failures and never
/// surface them, and callers dispatch them only after the local mutation has
/// succeeded.
pub trait LegacyStoreChannel: Send + Sync {
    fn store_created(&self, store: &Store) -> impl Future<Output = ()> + Send;

    fn store_updated(&self, store: &Store) -> impl Future<Output = ()> + Send;
}
