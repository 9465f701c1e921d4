//! Retail store entity

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a retail store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(Uuid);

impl StoreId {
    /// Generate a new random StoreId
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for StoreId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A retail store served by the fulfilment network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    id: StoreId,
    name: String,
    quantity_products_in_stock: u32,
}

impl Store {
    pub fn new(name: impl Into<String>, quantity_products_in_stock: u32) -> Self {
        Self {
            id: StoreId::new(),
            name: name.into(),
            quantity_products_in_stock,
        }
    }

    /// Create a Store with explicit values (used for reconstruction)
    pub fn from_parts(id: StoreId, name: String, quantity_products_in_stock: u32) -> Self {
        Self {
            id,
            name,
            quantity_products_in_stock,
        }
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_products_in_stock(&self) -> u32 {
        self.quantity_products_in_stock
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_quantity_products_in_stock(&mut self, quantity: u32) {
        self.quantity_products_in_stock = quantity;
    }
}
