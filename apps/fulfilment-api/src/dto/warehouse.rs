//! DTOs for warehouse endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fulfilment_domain::warehouse::Warehouse;

/// Request body for creating a warehouse unit
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    /// Externally assigned unique code of the unit
    #[schema(example = "MWH.001")]
    pub business_unit_code: String,
    /// Identifier of the location the unit is bound to
    #[schema(example = "ZWOLLE-001")]
    pub location: String,
    /// Maximum holding of the unit
    #[schema(example = 40)]
    pub capacity: u32,
    /// Quantity currently held
    #[schema(example = 10)]
    pub stock: u32,
}

/// Request body for replacing the active warehouse unit under a code
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceWarehouseRequest {
    /// Identifier of the location the replacement is bound to
    #[schema(example = "AMSTERDAM-001")]
    pub location: String,
    /// Maximum holding of the replacement
    #[schema(example = 50)]
    pub capacity: u32,
    /// Quantity carried over; must equal the replaced unit's stock
    #[schema(example = 10)]
    pub stock: u32,
}

/// Response body describing a warehouse unit
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseResponse {
    #[schema(example = "MWH.001")]
    pub business_unit_code: String,
    #[schema(example = "ZWOLLE-001")]
    pub location: String,
    pub capacity: u32,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    /// Set once the unit has been archived
    pub archived_at: Option<DateTime<Utc>>,
}

impl From<&Warehouse> for WarehouseResponse {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            business_unit_code: warehouse.business_unit_code().to_string(),
            location: warehouse.location().to_string(),
            capacity: warehouse.capacity(),
            stock: warehouse.stock(),
            created_at: *warehouse.created_at(),
            archived_at: warehouse.archived_at(),
        }
    }
}
