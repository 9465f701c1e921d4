//! # Fulfilment Domain Layer
//!
//! This crate contains the pure business logic and domain models for the
//! fulfilment warehouse platform. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Warehouse, Location, Store)
//! - **Ports**: Trait definitions for external dependencies (WarehouseStore,
//!   LocationResolver, StoreRepository)
//! - **Services**: Business logic orchestration (use cases + validator)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (databases, HTTP,
//! filesystems, etc.). All external dependencies are expressed as traits
//! (ports) that will be implemented by adapter layers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fulfilment_domain::warehouse::{Warehouse, WarehouseService};
//!
//! // The service is generic over any WarehouseStore / LocationResolver pair
//! async fn example<S, L>(service: WarehouseService<S, L>)
//! where
//!     S: fulfilment_domain::warehouse::WarehouseStore + Clone,
//!     L: fulfilment_domain::location::LocationResolver,
//! {
//!     let unit = Warehouse::new("MWH.001", "ZWOLLE-001", 40, 10);
//!     let created = service.create(unit).await.unwrap();
//!     println!("Created warehouse unit: {}", created.business_unit_code());
//! }
//! ```

pub mod location;
pub mod store;
pub mod warehouse;

// Re-export commonly used types
pub use location::{Location, LocationId, LocationResolver};
pub use warehouse::{
    BusinessUnitCode, Warehouse, WarehouseError, WarehouseService, WarehouseState, WarehouseStore,
    WarehouseValidator,
};
