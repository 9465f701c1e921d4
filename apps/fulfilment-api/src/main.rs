//! Fulfilment API - warehouse allocation service
//!
//! HTTP service exposing warehouse unit management (create, replace,
//! archive) and retail store management for the fulfilment platform.

mod dto;
mod handlers;
mod routes;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use fulfilment_domain::store::StoreService;
use fulfilment_domain::warehouse::WarehouseService;
use fulfilment_memory::{
    InMemoryStoreRepository, InMemoryWarehouseStore, LegacyStoreManagerGateway,
    StaticLocationDirectory,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub warehouse_service:
        Arc<WarehouseService<InMemoryWarehouseStore, StaticLocationDirectory>>,
    pub store_service: Arc<StoreService<InMemoryStoreRepository>>,
    pub legacy_channel: LegacyStoreManagerGateway,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting fulfilment API service");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Location directory: configuration-backed, with the shipped catalog as
    // the fallback
    let locations = match std::env::var("FULFILMENT_LOCATIONS_FILE") {
        Ok(path) => {
            info!(path = %path, "loading location catalog from file");
            StaticLocationDirectory::from_json_file(&path)?
        }
        Err(_) => {
            info!("FULFILMENT_LOCATIONS_FILE not set, using built-in catalog");
            StaticLocationDirectory::with_default_catalog()
        }
    };

    let warehouse_store = InMemoryWarehouseStore::new();
    let warehouse_service = WarehouseService::new(warehouse_store, locations);

    let store_repository = InMemoryStoreRepository::new();
    let store_service = StoreService::new(store_repository);

    // Create shared application state
    let state = AppState {
        warehouse_service: Arc::new(warehouse_service),
        store_service: Arc::new(store_service),
        legacy_channel: LegacyStoreManagerGateway::new(),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    // Get bind address from environment
    let host = std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("API_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
