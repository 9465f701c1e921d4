//! Retail store management module
//!
//! Stores are the retail outlets the fulfilment network serves. This module
//! is plain record keeping next to the warehouse allocation core: CRUD over
//! store records plus a fire-and-forget push to the legacy store manager
//! after successful mutations.

pub mod entity;
pub mod error;
pub mod ports;
pub mod service;

pub use entity::{Store, StoreId};
pub use error::StoreError;
pub use ports::{LegacyStoreChannel, StoreRepository};
pub use service::StoreService;
