//! DTOs for retail store endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fulfilment_domain::store::Store;

/// Request body for creating or fully updating a retail store
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    #[schema(example = "TONSTAD")]
    pub name: String,
    #[schema(example = 10)]
    pub quantity_products_in_stock: u32,
}

/// Request body for partially updating a retail store
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchStoreRequest {
    #[schema(example = "TONSTAD")]
    pub name: Option<String>,
    #[schema(example = 25)]
    pub quantity_products_in_stock: Option<u32>,
}

/// Response body describing a retail store
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    #[schema(example = "0191d2c0-4c7e-7e30-b4a4-222f351d6f3c")]
    pub id: String,
    #[schema(example = "TONSTAD")]
    pub name: String,
    #[schema(example = 10)]
    pub quantity_products_in_stock: u32,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id().to_string(),
            name: store.name().to_string(),
            quantity_products_in_stock: store.quantity_products_in_stock(),
        }
    }
}
