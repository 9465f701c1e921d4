//! Retail store handlers
//!
//! Mutations that succeed locally are pushed to the legacy store manager as
//! a detached fire-and-forget task; a legacy outage never fails the request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use fulfilment_domain::store::{LegacyStoreChannel, Store, StoreError, StoreId};

use crate::{
    dto::{
        store::{PatchStoreRequest, StoreRequest, StoreResponse},
        ErrorResponse,
    },
    AppState,
};

/// List all retail stores, ordered by name
#[utoipa::path(
    get,
    path = "/stores",
    responses(
        (status = 200, description = "All retail stores", body = [StoreResponse]),
        (status = 500, description = "Repository failure", body = ErrorResponse)
    ),
    tag = "stores"
)]
pub async fn list_stores(State(state): State<AppState>) -> Response {
    match state.store_service.list().await {
        Ok(stores) => {
            let body: Vec<StoreResponse> = stores.iter().map(StoreResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Fetch a single retail store
#[utoipa::path(
    get,
    path = "/stores/{id}",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "Retail store", body = StoreResponse),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "No store under this identifier", body = ErrorResponse)
    ),
    tag = "stores"
)]
pub async fn get_store(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.store_service.get(&id).await {
        Ok(store) => (StatusCode::OK, Json(StoreResponse::from(&store))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Create a retail store
#[utoipa::path(
    post,
    path = "/stores",
    request_body = StoreRequest,
    responses(
        (status = 201, description = "Store created", body = StoreResponse),
        (status = 422, description = "Store name was not set", body = ErrorResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse)
    ),
    tag = "stores"
)]
pub async fn create_store(
    State(state): State<AppState>,
    Json(payload): Json<StoreRequest>,
) -> Response {
    info!(name = %payload.name, "received create store request");

    match state
        .store_service
        .create(payload.name, payload.quantity_products_in_stock)
        .await
    {
        Ok(store) => {
            notify_legacy(&state, &store, LegacyEvent::Created);
            (StatusCode::CREATED, Json(StoreResponse::from(&store))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Fully update a retail store
#[utoipa::path(
    put,
    path = "/stores/{id}",
    params(("id" = String, Path, description = "Store identifier")),
    request_body = StoreRequest,
    responses(
        (status = 200, description = "Store updated", body = StoreResponse),
        (status = 404, description = "No store under this identifier", body = ErrorResponse),
        (status = 422, description = "Store name was not set", body = ErrorResponse)
    ),
    tag = "stores"
)]
pub async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StoreRequest>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .store_service
        .update(&id, payload.name, payload.quantity_products_in_stock)
        .await
    {
        Ok(store) => {
            notify_legacy(&state, &store, LegacyEvent::Updated);
            (StatusCode::OK, Json(StoreResponse::from(&store))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Partially update a retail store
#[utoipa::path(
    patch,
    path = "/stores/{id}",
    params(("id" = String, Path, description = "Store identifier")),
    request_body = PatchStoreRequest,
    responses(
        (status = 200, description = "Store patched", body = StoreResponse),
        (status = 404, description = "No store under this identifier", body = ErrorResponse),
        (status = 422, description = "Store name was not set", body = ErrorResponse)
    ),
    tag = "stores"
)]
pub async fn patch_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PatchStoreRequest>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .store_service
        .patch(&id, payload.name, payload.quantity_products_in_stock)
        .await
    {
        Ok(store) => {
            notify_legacy(&state, &store, LegacyEvent::Updated);
            (StatusCode::OK, Json(StoreResponse::from(&store))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Delete a retail store
#[utoipa::path(
    delete,
    path = "/stores/{id}",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 204, description = "Store deleted"),
        (status = 404, description = "No store under this identifier", body = ErrorResponse)
    ),
    tag = "stores"
)]
pub async fn delete_store(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.store_service.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

enum LegacyEvent {
    Created,
    Updated,
}

/// Dispatch the legacy push after a committed mutation, detached from the
/// request
fn notify_legacy(state: &AppState, store: &Store, event: LegacyEvent) {
    let legacy = state.legacy_channel.clone();
    let snapshot = store.clone();
    tokio::spawn(async move {
        match event {
            LegacyEvent::Created => legacy.store_created(&snapshot).await,
            LegacyEvent::Updated => legacy.store_updated(&snapshot).await,
        }
    });
}

fn parse_id(raw: &str) -> Result<StoreId, Response> {
    Uuid::parse_str(raw).map(StoreId::from_uuid).map_err(|_| {
        warn!(id = %raw, "malformed store identifier");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_id".to_string(),
                message: format!("malformed store identifier: {raw}"),
            }),
        )
            .into_response()
    })
}

fn error_response(err: StoreError) -> Response {
    let (status, code) = match &err {
        StoreError::NameNotSet => (StatusCode::UNPROCESSABLE_ENTITY, "name_not_set"),
        StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        StoreError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
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
