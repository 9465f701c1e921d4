//! API routes

pub mod store;
pub mod warehouse;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Router};
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        store::{PatchStoreRequest, StoreRequest, StoreResponse},
        warehouse::{CreateWarehouseRequest, ReplaceWarehouseRequest, WarehouseResponse},
        ErrorResponse,
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::warehouse::list_warehouses,
        handlers::warehouse::create_warehouse,
        handlers::warehouse::get_warehouse,
        handlers::warehouse::archive_warehouse,
        handlers::warehouse::replace_warehouse,
        handlers::store::list_stores,
        handlers::store::get_store,
        handlers::store::create_store,
        handlers::store::update_store,
        handlers::store::patch_store,
        handlers::store::delete_store,
        liveness_handler,
        readiness_handler
    ),
    components(
        schemas(
            CreateWarehouseRequest,
            ReplaceWarehouseRequest,
            WarehouseResponse,
            StoreRequest,
            PatchStoreRequest,
            StoreResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "warehouse", description = "Warehouse unit management"),
        (name = "stores", description = "Retail store management"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Fulfilment API",
        version = "0.1.0",
        description = "Warehouse allocation service for the fulfilment platform",
        contact(
            name = "Fulfilment Platform Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(warehouse::routes())
        .merge(store::routes())
        .route("/health/live", axum::routing::get(liveness_handler))
        .route("/health/ready", axum::routing::get(readiness_handler))
        .with_state(state)
}

/// Liveness check endpoint
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = String)
    ),
    tag = "health"
)]
async fn liveness_handler() -> &'static str {
    "OK"
}

/// Readiness check endpoint, probing the warehouse store
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = String),
        (status = 503, description = "Warehouse store is unavailable")
    ),
    tag = "health"
)]
async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.warehouse_service.list().await {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(err) => {
            error!(error = %err, "warehouse store readiness probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "warehouse store unavailable")
        }
    }
}
