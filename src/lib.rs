//! Bookshelf Library Catalog
//!
//! An in-memory book catalog with admin and user roles, exposed as a REST
//! JSON API. The catalog lives for one session and is discarded on logout.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            services: Arc::new(services::Services::new()),
        }
    }
}
