//! Warehouse routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::warehouse, AppState};

/// Create warehouse routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/warehouse",
            get(warehouse::list_warehouses).post(warehouse::create_warehouse),
        )
        .route(
            "/warehouse/:code",
            get(warehouse::get_warehouse).delete(warehouse::archive_warehouse),
        )
        .route(
            "/warehouse/:code/replacement",
            post(warehouse::replace_warehouse),
        )
}
