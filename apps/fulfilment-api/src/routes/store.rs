//! Retail store routes

use axum::{routing::get, Router};

use crate::{handlers::store, AppState};

/// Create retail store routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stores", get(store::list_stores).post(store::create_store))
        .route(
            "/stores/:id",
            get(store::get_store)
                .put(store::update_store)
                .patch(store::patch_store)
                .delete(store::delete_store),
        )
}
