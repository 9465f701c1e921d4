//! In-memory implementation of the `StoreRepository` port

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use tracing::{debug, instrument};

use fulfilment_domain::store::{Store, StoreError, StoreId, StoreRepository};

/// In-memory, id-keyed repository of retail store records
#[derive(Clone, Default)]
pub struct InMemoryStoreRepository {
    stores: Arc<RwLock<HashMap<StoreId, Store>>>,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<StoreId, Store>>, StoreError> {
        self.stores
            .read()
            .map_err(|_| StoreError::storage("store record lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<StoreId, Store>>, StoreError> {
        self.stores
            .write()
            .map_err(|_| StoreError::storage("store record lock poisoned"))
    }
}

impl StoreRepository for InMemoryStoreRepository {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Store>, StoreError>> + Send {
        let result = self.read().map(|stores| {
            let mut all: Vec<Store> = stores.values().cloned().collect();
            all.sort_by(|a, b| a.name().cmp(b.name()));
            all
        });
        async move { result }
    }

    #[instrument(skip(self), fields(id = %id))]
    fn find_by_id(
        &self,
        id: &StoreId,
    ) -> impl Future<Output = Result<Option<Store>, StoreError>> + Send {
        let result = self.read().map(|stores| stores.get(id).cloned());
        async move { result }
    }

    #[instrument(skip(self, store), fields(id = %store.id()))]
    fn create(&self, store: &Store) -> impl Future<Output = Result<(), StoreError>> + Send {
        let result = self.write().map(|mut stores| {
            stores.insert(store.id(), store.clone());
            debug!("store record persisted");
        });
        async move { result }
    }

    #[instrument(skip(self, store), fields(id = %store.id()))]
    fn update(&self, store: &Store) -> impl Future<Output = Result<(), StoreError>> + Send {
        let result = (|| {
            let mut stores = self.write()?;
            match stores.get_mut(&store.id()) {
                Some(stored) => {
                    *stored = store.clone();
                    debug!("store record rewritten");
                    Ok(())
                }
                None => Err(StoreError::NotFound(store.id())),
            }
        })();
        async move { result }
    }

    #[instrument(skip(self), fields(id = %id))]
    fn delete(&self, id: &StoreId) -> impl Future<Output = Result<(), StoreError>> + Send {
        let result = (|| {
            let mut stores = self.write()?;
            match stores.remove(id) {
                Some(_) => {
                    debug!("store record deleted");
                    Ok(())
                }
                None => Err(StoreError::NotFound(*id)),
            }
        })();
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find() {
        let repository = InMemoryStoreRepository::new();
        let store = Store::new("TONSTAD", 10);

        repository.create(&store).await.unwrap();

        assert_eq!(
            repository.find_by_id(&store.id()).await.unwrap(),
            Some(store)
        );
    }

    #[tokio::test]
    async fn test_list_is_name_ordered() {
        let repository = InMemoryStoreRepository::new();
        repository.create(&Store::new("SMADAL", 1)).await.unwrap();
        repository.create(&Store::new("KALLAX", 2)).await.unwrap();

        let all = repository.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name()).collect();

        assert_eq!(names, vec!["KALLAX", "SMADAL"]);
    }

    #[tokio::test]
    async fn test_update_unknown_store_is_not_found() {
        let repository = InMemoryStoreRepository::new();
        let store = Store::new("TONSTAD", 10);

        let result = repository.update(&store).await;

        assert_eq!(result, Err(StoreError::NotFound(store.id())));
    }

    #[tokio::test]
    async fn test_delete_removes_the_record() {
        let repository = InMemoryStoreRepository::new();
        let store = Store::new("TONSTAD", 10);
        repository.create(&store).await.unwrap();

        repository.delete(&store.id()).await.unwrap();

        assert_eq!(repository.find_by_id(&store.id()).await.unwrap(), None);
        assert_eq!(
            repository.delete(&store.id()).await,
            Err(StoreError::NotFound(store.id()))
        );
    }
}
