//! Warehouse unit handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use fulfilment_domain::warehouse::{BusinessUnitCode, Warehouse, WarehouseError};

use crate::{
    dto::{
        warehouse::{CreateWarehouseRequest, ReplaceWarehouseRequest, WarehouseResponse},
        ErrorResponse,
    },
    AppState,
};

/// List all active warehouse units
#[utoipa::path(
    get,
    path = "/warehouse",
    responses(
        (status = 200, description = "Active warehouse units", body = [WarehouseResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn list_warehouses(State(state): State<AppState>) -> Response {
    match state.warehouse_service.list().await {
        Ok(units) => {
            let body: Vec<WarehouseResponse> = units.iter().map(WarehouseResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => rejection_response(err),
    }
}

/// Create a new warehouse unit
#[utoipa::path(
    post,
    path = "/warehouse",
    request_body = CreateWarehouseRequest,
    responses(
        (status = 201, description = "Warehouse unit created", body = WarehouseResponse),
        (status = 400, description = "Rejected by an input rule", body = ErrorResponse),
        (status = 409, description = "Code or capacity conflict", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(payload): Json<CreateWarehouseRequest>,
) -> Response {
    info!(code = %payload.business_unit_code, "received create warehouse request");

    let candidate = Warehouse::new(
        payload.business_unit_code,
        payload.location,
        payload.capacity,
        payload.stock,
    );

    match state.warehouse_service.create(candidate).await {
        Ok(created) => {
            (StatusCode::CREATED, Json(WarehouseResponse::from(&created))).into_response()
        }
        Err(err) => rejection_response(err),
    }
}

/// Fetch the active warehouse unit under a business unit code
#[utoipa::path(
    get,
    path = "/warehouse/{code}",
    params(("code" = String, Path, description = "Business unit code")),
    responses(
        (status = 200, description = "Active warehouse unit", body = WarehouseResponse),
        (status = 404, description = "No active unit under this code", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    let code = BusinessUnitCode::from(code);
    match state.warehouse_service.find(&code).await {
        Ok(Some(unit)) => (StatusCode::OK, Json(WarehouseResponse::from(&unit))).into_response(),
        Ok(None) => {
            warn!(code = %code, "warehouse unit not found");
            rejection_response(WarehouseError::NotFound(code))
        }
        Err(err) => rejection_response(err),
    }
}

/// Archive the warehouse unit under a business unit code
#[utoipa::path(
    delete,
    path = "/warehouse/{code}",
    params(("code" = String, Path, description = "Business unit code")),
    responses(
        (status = 204, description = "Warehouse unit archived"),
        (status = 404, description = "No unit under this code", body = ErrorResponse),
        (status = 409, description = "Unit is already archived", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn archive_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    info!(code = %code, "received archive warehouse request");

    let code = BusinessUnitCode::from(code);
    let target = match state.warehouse_service.find_any(&code).await {
        Ok(Some(unit)) => unit,
        Ok(None) => {
            warn!(code = %code, "warehouse unit not found for archiving");
            return rejection_response(WarehouseError::NotFound(code));
        }
        Err(err) => return rejection_response(err),
    };

    match state.warehouse_service.archive(&target).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => rejection_response(err),
    }
}

/// Replace the active warehouse unit under a business unit code
#[utoipa::path(
    post,
    path = "/warehouse/{code}/replacement",
    params(("code" = String, Path, description = "Business unit code")),
    request_body = ReplaceWarehouseRequest,
    responses(
        (status = 200, description = "Warehouse unit replaced", body = WarehouseResponse),
        (status = 400, description = "Rejected by an input rule", body = ErrorResponse),
        (status = 404, description = "No active unit under this code", body = ErrorResponse),
        (status = 409, description = "State or capacity conflict", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn replace_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<ReplaceWarehouseRequest>,
) -> Response {
    info!(code = %code, "received replace warehouse request");

    let candidate = Warehouse::new(code, payload.location, payload.capacity, payload.stock);

    match state.warehouse_service.replace(candidate).await {
        Ok(replaced) => {
            (StatusCode::OK, Json(WarehouseResponse::from(&replaced))).into_response()
        }
        Err(err) => rejection_response(err),
    }
}

/// Map a domain rejection onto an HTTP status and error body
fn rejection_response(err: WarehouseError) -> Response {
    let (status, code) = match &err {
        WarehouseError::InvalidLocation(_)
        | WarehouseError::StockExceedsCapacity { .. }
        | WarehouseError::CannotAccommodateStock { .. }
        | WarehouseError::StockMismatch { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
        WarehouseError::NotFound(_) | WarehouseError::ReplacementNotFound(_) => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        WarehouseError::AlreadyArchived => (StatusCode::CONFLICT, "already_archived"),
        WarehouseError::BusinessUnitCodeInUse(_) => (StatusCode::CONFLICT, "code_in_use"),
        WarehouseError::MaxWarehousesReached(_) | WarehouseError::MaxCapacityReached(_) => {
            (StatusCode::CONFLICT, "capacity_conflict")
        }
        WarehouseError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
    };

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
        .into_response()
}
