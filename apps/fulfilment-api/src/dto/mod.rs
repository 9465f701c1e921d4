//! Request/response DTOs

pub mod store;
pub mod warehouse;

use serde::Serialize;
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    #[schema(example = "capacity_conflict")]
    pub error: String,
    /// Human-readable description of the rejection
    #[schema(example = "maximum capacity reached for location ZWOLLE-001")]
    pub message: String,
}
