//! Application state shared across handlers.

use std::sync::Arc;

use chrono::TimeDelta;
use fresh_daily_core::{CatalogStore, Storefront};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The [`Storefront`] sits behind
/// a single `RwLock`: every write (login, override edit, cart click) is
/// serialized through it, and every page render reads a consistent snapshot.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<Storefront>,
}

impl AppState {
    /// Create a new application state over `catalog`.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: CatalogStore) -> Self {
        let store =
            Storefront::with_notice_duration(catalog, TimeDelta::seconds(config.notice_seconds));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Shared read access to the store.
    pub async fn read(&self) -> RwLockReadGuard<'_, Storefront> {
        self.inner.store.read().await
    }

    /// Exclusive write access to the store.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Storefront> {
        self.inner.store.write().await
    }
}
