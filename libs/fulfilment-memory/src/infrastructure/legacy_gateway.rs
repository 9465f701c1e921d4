//! Temp-file emulation of the legacy store manager push
//!
//! The real legacy system is reached over an export drop: the gateway writes
//! the store record to a scratch file, reads it back to verify, and removes
//! it. Failures are logged and swallowed; a legacy outage must never fail
//! the local mutation that already committed.

use std::future::Future;
use std::path::PathBuf;

use tracing::{debug, error, info, instrument};

use fulfilment_domain::store::{LegacyStoreChannel, Store};

/// Gateway pushing store mutations to the legacy store manager
#[derive(Clone, Default)]
pub struct LegacyStoreManagerGateway;

impl LegacyStoreManagerGateway {
    pub fn new() -> Self {
        Self
    }

    fn scratch_path(store: &Store) -> PathBuf {
        std::env::temp_dir().join(format!("legacy-store-{}.txt", store.id()))
    }

    async fn push(store: &Store, verb: &str) -> std::io::Result<()> {
        let path = Self::scratch_path(store);
        let content = format!(
            "Store {}. [ name = {} ] [ items on stock = {} ]",
            verb,
            store.name(),
            store.quantity_products_in_stock()
        );

        tokio::fs::write(&path, &content).await?;
        debug!(path = %path.display(), "legacy export written");

        // read back to verify the export before handing it over
        let echoed = tokio::fs::read_to_string(&path).await?;
        debug!(content = %echoed, "legacy export verified");

        tokio::fs::remove_file(&path).await?;
        info!(id = %store.id(), "store synced with legacy system");
        Ok(())
    }
}

impl LegacyStoreChannel for LegacyStoreManagerGateway {
    #[instrument(skip(self, store), fields(id = %store.id()))]
    fn store_created(&self, store: &Store) -> impl Future<Output = ()> + Send {
        let store = store.clone();
        async move {
            if let Err(err) = Self::push(&store, "created").await {
                error!(error = %err, "failed to sync created store with legacy system");
            }
        }
    }

    #[instrument(skip(self, store), fields(id = %store.id()))]
    fn store_updated(&self, store: &Store) -> impl Future<Output = ()> + Send {
        let store = store.clone();
        async move {
            if let Err(err) = Self::push(&store, "updated").await {
                error!(error = %err, "failed to sync updated store with legacy system");
            }
        }
    }
}
