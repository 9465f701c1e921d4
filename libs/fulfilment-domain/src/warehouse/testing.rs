//! In-memory port fakes shared by the warehouse unit tests

use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::location::{Location, LocationId, LocationResolver};
use crate::warehouse::entity::Warehouse;
use crate::warehouse::error::WarehouseError;
use crate::warehouse::ids::BusinessUnitCode;
use crate::warehouse::ports::WarehouseStore;

pub(crate) fn unit(code: &str, location: &str, capacity: u32, stock: u32) -> Warehouse {
    Warehouse::new(code, location, capacity, stock)
}

pub(crate) fn archived(code: &str, location: &str, capacity: u32, stock: u32) -> Warehouse {
    let mut w = Warehouse::new(code, location, capacity, stock);
    w.archive(Utc::now());
    w
}

/// Append-only in-memory record list behind the `WarehouseStore` port
#[derive(Clone, Default)]
pub(crate) struct FakeStore {
    records: Arc<Mutex<Vec<Warehouse>>>,
    /// When set, the next `create` fails once with a storage error
    fail_next_create: Arc<Mutex<bool>>,
}

impl FakeStore {
    pub(crate) fn with_records(records: Vec<Warehouse>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_next_create: Arc::new(Mutex::new(false)),
        }
    }

    pub(crate) fn fail_next_create(&self) {
        *self.fail_next_create.lock().unwrap() = true;
    }

    pub(crate) fn snapshot(&self) -> Vec<Warehouse> {
        self.records.lock().unwrap().clone()
    }
}

impl WarehouseStore for FakeStore {
    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> impl Future<Output = Result<Option<Warehouse>, WarehouseError>> + Send {
        let found = self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.is_active() && w.business_unit_code() == code)
            .cloned();
        async move { Ok(found) }
    }

    fn find_any_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> impl Future<Output = Result<Option<Warehouse>, WarehouseError>> + Send {
        let found = self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|w| w.business_unit_code() == code)
            .cloned();
        async move { Ok(found) }
    }

    fn find_by_location(
        &self,
        location: &LocationId,
    ) -> impl Future<Output = Result<Vec<Warehouse>, WarehouseError>> + Send {
        let found: Vec<Warehouse> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.location() == location)
            .cloned()
            .collect();
        async move { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Warehouse>, WarehouseError>> + Send {
        let found: Vec<Warehouse> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.is_active())
            .cloned()
            .collect();
        async move { Ok(found) }
    }

    fn create(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send {
        let result = {
            let mut fail = self.fail_next_create.lock().unwrap();
            if *fail {
                *fail = false;
                Err(WarehouseError::storage("injected create failure"))
            } else {
                self.records.lock().unwrap().push(warehouse.clone());
                Ok(())
            }
        };
        async move { result }
    }

    fn update(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send {
        let result = {
            let mut records = self.records.lock().unwrap();
            match records
                .iter_mut()
                .rev()
                .find(|w| w.business_unit_code() == warehouse.business_unit_code())
            {
                Some(stored) => {
                    *stored = warehouse.clone();
                    Ok(())
                }
                None => Err(WarehouseError::NotFound(warehouse.business_unit_code().clone())),
            }
        };
        async move { result }
    }

    fn remove(
        &self,
        warehouse: &Warehouse,
    ) -> impl Future<Output = Result<(), WarehouseError>> + Send {
        let result = {
            let mut records = self.records.lock().unwrap();
            match records
                .iter_mut()
                .find(|w| w.is_active() && w.business_unit_code() == warehouse.business_unit_code())
            {
                Some(stored) => {
                    stored.archive(Utc::now());
                    Ok(())
                }
                None => Err(WarehouseError::NotFound(warehouse.business_unit_code().clone())),
            }
        };
        async move { result }
    }
}

/// Fixed catalog behind the `LocationResolver` port
#[derive(Clone)]
pub(crate) struct FakeLocations {
    known: Vec<Location>,
}

impl FakeLocations {
    pub(crate) fn new(known: Vec<Location>) -> Self {
        Self { known }
    }
}

impl LocationResolver for FakeLocations {
    fn resolve_by_identifier(
        &self,
        identifier: &LocationId,
    ) -> impl Future<Output = Option<Location>> + Send {
        let found = self
            .known
            .iter()
            .find(|l| &l.identifier == identifier)
            .cloned();
        async move { found }
    }
}
