//! Business logic services

pub mod catalog;

use crate::store::CatalogStore;

/// Container for all services
#[derive(Clone, Default)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services around a fresh, logged-out store
    pub fn new() -> Self {
        Self {
            catalog: catalog::CatalogService::new(CatalogStore::new()),
        }
    }
}
