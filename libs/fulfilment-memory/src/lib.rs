//! # Fulfilment In-Process Adapters
//!
//! Implementations of the fulfilment domain ports backed by process-local
//! state: an in-memory warehouse store, a configuration-backed location
//! directory, an in-memory retail store repository, and the temp-file
//! emulation of the legacy store manager push.
//!
//! All adapters convert their failures into the domain error types; no
//! infrastructure error leaks through the ports.

pub mod infrastructure;

pub use infrastructure::{
    InMemoryStoreRepository, InMemoryWarehouseStore, LegacyStoreManagerGateway,
    StaticLocationDirectory,
};
