//! End-to-end warehouse lifecycle tests over the real in-memory adapters
//!
//! These exercise the allocation rules and use cases through whole
//! create/replace/archive sequences and assert the location invariants hold
//! after every step.

use fulfilment_domain::location::{Location, LocationId};
use fulfilment_domain::warehouse::{
    BusinessUnitCode, Warehouse, WarehouseError, WarehouseService,
};
use fulfilment_memory::{InMemoryWarehouseStore, StaticLocationDirectory};

type Service = WarehouseService<InMemoryWarehouseStore, StaticLocationDirectory>;

fn service_with(locations: Vec<Location>) -> (Service, InMemoryWarehouseStore) {
    let store = InMemoryWarehouseStore::new();
    let directory = StaticLocationDirectory::new(locations);
    (WarehouseService::new(store.clone(), directory), store)
}

fn loc1() -> Vec<Location> {
    vec![Location::new("LOC1", 2, 1000)]
}

fn unit(code: &str, location: &str, capacity: u32, stock: u32) -> Warehouse {
    Warehouse::new(code, location, capacity, stock)
}

/// Count and capacity ceilings at a location after a sequence of operations
async fn location_footprint(store: &InMemoryWarehouseStore, location: &str) -> (usize, u64) {
    use fulfilment_domain::warehouse::WarehouseStore;

    let records = store
        .find_by_location(&LocationId::from(location))
        .await
        .unwrap();
    let active: Vec<_> = records.iter().filter(|w| w.is_active()).collect();
    let capacity = active.iter().map(|w| u64::from(w.capacity())).sum();
    (active.len(), capacity)
}

#[tokio::test]
async fn test_fills_location_up_to_unit_ceiling() {
    let (service, store) = service_with(loc1());

    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();
    let (count, capacity) = location_footprint(&store, "LOC1").await;
    assert!(count <= 2 && capacity <= 1000);

    service.create(unit("BU2", "LOC1", 100, 50)).await.unwrap();
    let (count, capacity) = location_footprint(&store, "LOC1").await;
    assert!(count <= 2 && capacity <= 1000);

    let third = service.create(unit("BU3", "LOC1", 100, 50)).await;
    assert_eq!(
        third,
        Err(WarehouseError::MaxWarehousesReached("LOC1".into()))
    );

    // the rejected unit left no trace
    let (count, _) = location_footprint(&store, "LOC1").await;
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_aggregate_capacity_ceiling_is_inclusive() {
    let (service, store) = service_with(loc1());
    service.create(unit("BU1", "LOC1", 500, 50)).await.unwrap();

    let over = service.create(unit("BU2", "LOC1", 600, 50)).await;
    assert_eq!(over, Err(WarehouseError::MaxCapacityReached("LOC1".into())));

    // the boundary itself is allowed: 500 + 500 = 1000
    service.create(unit("BU2", "LOC1", 500, 50)).await.unwrap();
    let (_, capacity) = location_footprint(&store, "LOC1").await;
    assert_eq!(capacity, 1000);
}

#[tokio::test]
async fn test_oversized_stock_is_rejected_before_any_mutation() {
    let (service, store) = service_with(loc1());

    let result = service.create(unit("BU1", "LOC1", 100, 150)).await;

    assert_eq!(
        result,
        Err(WarehouseError::StockExceedsCapacity {
            stock: 150,
            capacity: 100
        })
    );
    let (count, _) = location_footprint(&store, "LOC1").await;
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_replacement_that_cannot_hold_old_stock_leaves_store_untouched() {
    let (service, store) = service_with(loc1());
    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();

    let result = service.replace(unit("BU1", "LOC1", 40, 50)).await;

    assert_eq!(
        result,
        Err(WarehouseError::CannotAccommodateStock {
            capacity: 40,
            stock: 50
        })
    );
    let active = service
        .find(&BusinessUnitCode::from("BU1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.capacity(), 100, "predecessor stays the active record");
    let (count, _) = location_footprint(&store, "LOC1").await;
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_replacement_with_diverging_stock_is_rejected() {
    let (service, _) = service_with(loc1());
    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();

    let result = service.replace(unit("BU1", "LOC1", 200, 60)).await;

    assert_eq!(
        result,
        Err(WarehouseError::StockMismatch {
            expected: 50,
            actual: 60
        })
    );
}

#[tokio::test]
async fn test_replacement_preserves_stock_and_archives_predecessor() {
    let (service, _) = service_with(loc1());
    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();

    service.replace(unit("BU1", "LOC1", 200, 50)).await.unwrap();

    let code = BusinessUnitCode::from("BU1");
    let active = service.find(&code).await.unwrap().unwrap();
    assert_eq!(active.capacity(), 200);
    assert_eq!(active.stock(), 50, "stock carries over exactly");
}

#[tokio::test]
async fn test_replace_in_place_is_measured_against_other_occupants_only() {
    // LOC1 holds two units filling the capacity ceiling; growing one of them
    // within the space freed by its own removal must pass
    let (service, store) = service_with(loc1());
    service.create(unit("BU1", "LOC1", 400, 50)).await.unwrap();
    service.create(unit("BU2", "LOC1", 500, 50)).await.unwrap();

    service.replace(unit("BU1", "LOC1", 500, 50)).await.unwrap();

    let (count, capacity) = location_footprint(&store, "LOC1").await;
    assert_eq!((count, capacity), (2, 1000));

    // but growing past the other occupants' remaining room fails
    let result = service.replace(unit("BU2", "LOC1", 600, 50)).await;
    assert_eq!(result, Err(WarehouseError::MaxCapacityReached("LOC1".into())));
}

#[tokio::test]
async fn test_replacement_can_move_to_another_location() {
    let (service, store) = service_with(vec![
        Location::new("LOC1", 2, 1000),
        Location::new("LOC2", 1, 500),
    ]);
    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();

    service.replace(unit("BU1", "LOC2", 100, 50)).await.unwrap();

    let (at_old, _) = location_footprint(&store, "LOC1").await;
    let (at_new, _) = location_footprint(&store, "LOC2").await;
    assert_eq!((at_old, at_new), (0, 1));
}

#[tokio::test]
async fn test_archival_is_terminal() {
    let (service, _) = service_with(loc1());
    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();
    let code = BusinessUnitCode::from("BU1");

    let active = service.find(&code).await.unwrap().unwrap();
    service.archive(&active).await.unwrap();

    let archived = service.find_any(&code).await.unwrap().unwrap();
    assert!(archived.archived_at().is_some());

    // a second archival is rejected
    assert_eq!(
        service.archive(&archived).await,
        Err(WarehouseError::AlreadyArchived)
    );

    // and so is replacing the archived record, before any location or
    // capacity rule runs
    assert_eq!(
        service.replace(unit("BU1", "LOC1", 200, 50)).await,
        Err(WarehouseError::AlreadyArchived)
    );
}

#[tokio::test]
async fn test_archived_units_free_their_location_but_pin_their_code() {
    let (service, _) = service_with(vec![Location::new("LOC1", 1, 1000)]);
    service.create(unit("BU1", "LOC1", 100, 50)).await.unwrap();

    let active = service
        .find(&BusinessUnitCode::from("BU1"))
        .await
        .unwrap()
        .unwrap();
    service.archive(&active).await.unwrap();

    // the slot is free again for a different code
    service.create(unit("BU2", "LOC1", 100, 50)).await.unwrap();

    // but the archived code is never reusable
    assert_eq!(
        service.create(unit("BU1", "LOC1", 100, 50)).await,
        Err(WarehouseError::BusinessUnitCodeInUse("BU1".into()))
    );
}

#[tokio::test]
async fn test_default_catalog_ceilings_are_enforced() {
    let store = InMemoryWarehouseStore::new();
    let service = WarehouseService::new(
        store.clone(),
        StaticLocationDirectory::with_default_catalog(),
    );

    // ZWOLLE-001 admits a single unit of at most 40 capacity
    service
        .create(unit("MWH.001", "ZWOLLE-001", 40, 10))
        .await
        .unwrap();
    assert_eq!(
        service.create(unit("MWH.002", "ZWOLLE-001", 10, 0)).await,
        Err(WarehouseError::MaxWarehousesReached("ZWOLLE-001".into()))
    );

    assert_eq!(
        service.create(unit("MWH.003", "UNKNOWN-001", 10, 0)).await,
        Err(WarehouseError::InvalidLocation("UNKNOWN-001".into()))
    );
}
