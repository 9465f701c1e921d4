//! In-memory implementation of the `WarehouseStore` port
//!
//! Records are append-only: replacement and archival never drop rows, they
//! only flip lifecycle state, so archived history stays queryable the way a
//! soft-deleting database table would keep it.

use std::future::Future;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::{debug, instrument, warn};

use fulfilment_domain::location::LocationId;
use fulfilment_domain::warehouse::{BusinessUnitCode, Warehouse, WarehouseError, WarehouseStore};

/// In-memory, append-only store of warehouse records
///
/// Every port call takes the single record lock for its whole critical
/// section, which gives each call the atomicity the port contract asks of a
/// storage backend; `create` enforces the active-code uniqueness constraint.
#[derive(Clone, Default)]
pub struct InMemoryWarehouseStore {
    records: Arc<RwLock<Vec<Warehouse>>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records (tests, demo data)
    pub fn with_records(records: Vec<Warehouse>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Warehouse>>, WarehouseError> {
        self.records
            .read()
            .map_err(|_| WarehouseError::storage("warehouse record lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Warehouse>>, WarehouseError> {
        self.records
            .write()
            .map_err(|_| WarehouseError::storage("warehouse record lock poisoned"))
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    #[instrument(skip(self), fields(code = %code))]
    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> impl Future<Output = Result<Option<Warehouse>, WarehouseError>> + Send {
        let result = self.read().map(|records| {
            records
                .iter()
                .find(|w| w.is_active() && w.business_unit_code() == code)
                .cloned()
        });
        async move { result }
    }

    #[instrument(skip(self), fields(code = %code))]
    fn find_any_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> impl Future<Output = Result<Option<Warehouse>, WarehouseError>> + Send {
        // records are appended in order, so the last match is the most recent
        let result = self.read().map(|records| {
            records
                .iter()
                .rev()
                .find(|w| w.business_unit_code() == code)
                .cloned()
        });
        async move { result }
    }

    #[instrument(skip(self), fields(location = %location))]
    fn find_by_location(
        &self,
        location: &LocationId,
    ) -> impl Future<Output = Result<Vec<Warehouse>, WarehouseError>> + Send {
        let result = self.read().map(|records| {
            records
                .iter()
                .filter(|w| w.location() == location)
                .cloned()
                .collect()
        });
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Warehouse>, WarehouseError>> + Send {
        let result = self.read().map(|records| {
            records
                .iter()
                .filter(|w| w.is_active())
                .cloned()
                .collect()
        });
        async move { result }
    }

    #[instrument(skip(self, warehouse), fields(code = %warehouse.business_unit_code()))]
    fn create(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send {
        let result = (|| {
            let mut records = self.write()?;
            if records
                .iter()
                .any(|w| w.is_active() && w.business_unit_code() == warehouse.business_unit_code())
            {
                warn!("refusing second active record under code");
                return Err(WarehouseError::BusinessUnitCodeInUse(
                    warehouse.business_unit_code().clone(),
                ));
            }
            records.push(warehouse.clone());
            debug!("warehouse record persisted");
            Ok(())
        })();
        async move { result }
    }

    #[instrument(skip(self, warehouse), fields(code = %warehouse.business_unit_code()))]
    fn update(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send {
        let result = (|| {
            let mut records = self.write()?;
            match records
                .iter_mut()
                .rev()
                .find(|w| w.business_unit_code() == warehouse.business_unit_code())
            {
                Some(stored) => {
                    *stored = warehouse.clone();
                    debug!("warehouse record rewritten");
                    Ok(())
                }
                None => Err(WarehouseError::NotFound(
                    warehouse.business_unit_code().clone(),
                )),
            }
        })();
        async move { result }
    }

    #[instrument(skip(self, warehouse), fields(code = %warehouse.business_unit_code()))]
    fn remove(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send {
        let result = (|| {
            let mut records = self.write()?;
            match records
                .iter_mut()
                .find(|w| w.is_active() && w.business_unit_code() == warehouse.business_unit_code())
            {
                Some(stored) => {
                    stored.archive(Utc::now());
                    debug!("warehouse record archived");
                    Ok(())
                }
                None => Err(WarehouseError::NotFound(
                    warehouse.business_unit_code().clone(),
                )),
            }
        })();
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(code: &str, location: &str, capacity: u32, stock: u32) -> Warehouse {
        Warehouse::new(code, location, capacity, stock)
    }

    #[tokio::test]
    async fn test_create_then_find_by_code() {
        let store = InMemoryWarehouseStore::new();
        let w = unit("MWH.001", "ZWOLLE-001", 40, 10);

        store.create(&w).await.unwrap();

        let found = store
            .find_by_business_unit_code(w.business_unit_code())
            .await
            .unwrap();
        assert_eq!(found, Some(w));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_active_code() {
        let store = InMemoryWarehouseStore::new();
        store.create(&unit("MWH.001", "ZWOLLE-001", 40, 10)).await.unwrap();

        let result = store.create(&unit("MWH.001", "ZWOLLE-002", 40, 10)).await;

        assert_eq!(
            result,
            Err(WarehouseError::BusinessUnitCodeInUse("MWH.001".into()))
        );
    }

    #[tokio::test]
    async fn test_remove_stamps_archival_and_hides_from_active_lookup() {
        let store = InMemoryWarehouseStore::new();
        let w = unit("MWH.001", "ZWOLLE-001", 40, 10);
        store.create(&w).await.unwrap();

        store.remove(&w).await.unwrap();

        assert_eq!(
            store
                .find_by_business_unit_code(w.business_unit_code())
                .await
                .unwrap(),
            None
        );
        let any = store
            .find_any_by_business_unit_code(w.business_unit_code())
            .await
            .unwrap()
            .unwrap();
        assert!(any.archived_at().is_some());
        // archival changes nothing else
        assert_eq!(any.capacity(), 40);
        assert_eq!(any.stock(), 10);
    }

    #[tokio::test]
    async fn test_remove_without_active_record_is_not_found() {
        let store = InMemoryWarehouseStore::new();
        let w = unit("MWH.001", "ZWOLLE-001", 40, 10);
        store.create(&w).await.unwrap();
        store.remove(&w).await.unwrap();

        let again = store.remove(&w).await;

        assert_eq!(again, Err(WarehouseError::NotFound("MWH.001".into())));
    }

    #[tokio::test]
    async fn test_find_by_location_includes_archived_records() {
        let store = InMemoryWarehouseStore::new();
        let w1 = unit("MWH.001", "ZWOLLE-001", 40, 10);
        let w2 = unit("MWH.002", "ZWOLLE-001", 40, 10);
        let elsewhere = unit("MWH.003", "TILBURG-001", 40, 10);
        store.create(&w1).await.unwrap();
        store.create(&w2).await.unwrap();
        store.create(&elsewhere).await.unwrap();
        store.remove(&w1).await.unwrap();

        let at_location = store
            .find_by_location(&LocationId::from("ZWOLLE-001"))
            .await
            .unwrap();

        assert_eq!(at_location.len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_returns_active_only() {
        let store = InMemoryWarehouseStore::new();
        let w1 = unit("MWH.001", "ZWOLLE-001", 40, 10);
        let w2 = unit("MWH.002", "ZWOLLE-001", 40, 10);
        store.create(&w1).await.unwrap();
        store.create(&w2).await.unwrap();
        store.remove(&w1).await.unwrap();

        let all = store.get_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].business_unit_code().as_str(), "MWH.002");
    }

    #[tokio::test]
    async fn test_update_rewrites_latest_record_for_code() {
        let store = InMemoryWarehouseStore::new();
        let w = unit("MWH.001", "ZWOLLE-001", 40, 10);
        store.create(&w).await.unwrap();
        store.remove(&w).await.unwrap();

        // restoring the active copy un-archives the latest record
        store.update(&w).await.unwrap();

        let found = store
            .find_by_business_unit_code(w.business_unit_code())
            .await
            .unwrap();
        assert_eq!(found, Some(w));
    }
}
