//! Retail store use cases

use tracing::info;

use crate::store::entity::{Store, StoreId};
use crate::store::error::{Result, StoreError};
use crate::store::ports::StoreRepository;

/// Service exposing retail store CRUD to the boundary
pub struct StoreService<R> {
    repository: R,
}

impl<R> StoreService<R>
where
    R: StoreRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// All stores, ordered by name
    pub async fn list(&self) -> Result<Vec<Store>> {
        self.repository.list_all().await
    }

    pub async fn get(&self, id: &StoreId) -> Result<Store> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StoreError::NotFound(*id))
    }

    pub async fn create(&self, name: String, quantity_products_in_stock: u32) -> Result<Store> {
        if name.trim().is_empty() {
            return Err(StoreError::NameNotSet);
        }

        let store = Store::new(name, quantity_products_in_stock);
        self.repository.create(&store).await?;
        info!(id = %store.id(), name = %store.name(), "store created");
        Ok(store)
    }

    /// Full update of name and stock quantity
    pub async fn update(
        &self,
        id: &StoreId,
        name: String,
        quantity_products_in_stock: u32,
    ) -> Result<Store> {
        if name.trim().is_empty() {
            return Err(StoreError::NameNotSet);
        }

        let mut store = self.get(id).await?;
        store.set_name(name);
        store.set_quantity_products_in_stock(quantity_products_in_stock);
        self.repository.update(&store).await?;
        info!(id = %store.id(), "store updated");
        Ok(store)
    }

    /// Partial update; absent fields keep their stored value
    pub async fn patch(
        &self,
        id: &StoreId,
        name: Option<String>,
        quantity_products_in_stock: Option<u32>,
    ) -> Result<Store> {
        if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(StoreError::NameNotSet);
        }

        let mut store = self.get(id).await?;
        if let Some(name) = name {
            store.set_name(name);
        }
        if let Some(quantity) = quantity_products_in_stock {
            store.set_quantity_products_in_stock(quantity);
        }
        self.repository.update(&store).await?;
        info!(id = %store.id(), "store patched");
        Ok(store)
    }

    pub async fn delete(&self, id: &StoreId) -> Result<()> {
        // surfaces NotFound before touching the repository's delete path
        self.get(id).await?;
        self.repository.delete(id).await?;
        info!(id = %id, "store deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct InMemoryRepository {
        stores: Arc<Mutex<HashMap<StoreId, Store>>>,
    }

    impl StoreRepository for InMemoryRepository {
        fn list_all(&self) -> impl Future<Output = Result<Vec<Store>>> + Send {
            let mut stores: Vec<Store> = self.stores.lock().unwrap().values().cloned().collect();
            stores.sort_by(|a, b| a.name().cmp(b.name()));
            async move { Ok(stores) }
        }

        fn find_by_id(&self, id: &StoreId) -> impl Future<Output = Result<Option<Store>>> + Send {
            let found = self.stores.lock().unwrap().get(id).cloned();
            async move { Ok(found) }
        }

        fn create(&self, store: &Store) -> impl Future<Output = Result<()>> + Send {
            self.stores
                .lock()
                .unwrap()
                .insert(store.id(), store.clone());
            async move { Ok(()) }
        }

        fn update(&self, store: &Store) -> impl Future<Output = Result<()>> + Send {
            self.stores
                .lock()
                .unwrap()
                .insert(store.id(), store.clone());
            async move { Ok(()) }
        }

        fn delete(&self, id: &StoreId) -> impl Future<Output = Result<()>> + Send {
            self.stores.lock().unwrap().remove(id);
            async move { Ok(()) }
        }
    }

    fn service() -> StoreService<InMemoryRepository> {
        StoreService::new(InMemoryRepository::default())
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();

        let created = service.create("TONSTAD".to_string(), 10).await.unwrap();
        let fetched = service.get(&created.id()).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = service();

        let result = service.create("   ".to_string(), 10).await;

        assert_eq!(result, Err(StoreError::NameNotSet));
    }

    #[tokio::test]
    async fn test_get_unknown_store_is_not_found() {
        let service = service();
        let id = StoreId::new();

        assert_eq!(service.get(&id).await, Err(StoreError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_update_rewrites_both_fields() {
        let service = service();
        let created = service.create("TONSTAD".to_string(), 10).await.unwrap();

        let updated = service
            .update(&created.id(), "KALLAX".to_string(), 25)
            .await
            .unwrap();

        assert_eq!(updated.name(), "KALLAX");
        assert_eq!(updated.quantity_products_in_stock(), 25);
    }

    #[tokio::test]
    async fn test_patch_keeps_absent_fields() {
        let service = service();
        let created = service.create("TONSTAD".to_string(), 10).await.unwrap();

        let patched = service.patch(&created.id(), None, Some(42)).await.unwrap();

        assert_eq!(patched.name(), "TONSTAD");
        assert_eq!(patched.quantity_products_in_stock(), 42);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();
        let created = service.create("TONSTAD".to_string(), 10).await.unwrap();

        service.delete(&created.id()).await.unwrap();

        assert_eq!(
            service.get(&created.id()).await,
            Err(StoreError::NotFound(created.id()))
        );
    }

    #[tokio::test]
    async fn test_list_is_name_ordered() {
        let service = service();
        service.create("SMADAL".to_string(), 1).await.unwrap();
        service.create("KALLAX".to_string(), 2).await.unwrap();

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();

        assert_eq!(names, vec!["KALLAX".to_string(), "SMADAL".to_string()]);
    }
}
