use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::catalog::LoadStatus;
use crate::domain::ports::CatalogSource;
use crate::domain::product::Product;

/// Fetches the catalog once and publishes the resulting [`LoadStatus`].
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    status: watch::Sender<LoadStatus>,
    started: AtomicBool,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (status, _) = watch::channel(LoadStatus::Loading);
        Self {
            source,
            status,
            started: AtomicBool::new(false),
        }
    }

    /// Performs the one catalog fetch of this loader's lifetime.
    ///
    /// Returns `false` without touching the source if a fetch was already
    /// started. Failures end in [`LoadStatus::Error`]; there is no retry.
    pub async fn load(&self) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            log::debug!("Catalog load already started; ignoring");
            return false;
        }

        log::info!("Fetching product catalog");
        let next = match self.source.fetch_products().await {
            Ok(products) => {
                log::info!("Catalog loaded with {} products", products.len());
                LoadStatus::Loaded(products)
            }
            Err(e) => {
                log::error!("Catalog fetch failed: {}", e);
                LoadStatus::Error(e.to_string())
            }
        };
        self.status.send_replace(next);
        true
    }

    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.status.subscribe()
    }

    pub fn find_product(&self, id: i64) -> Option<Product> {
        self.status.borrow().find_product(id).cloned()
    }
}
