use std::sync::Arc;

use shotify_db::services::{ProjectService, TemplateCatalog};
use shotify_db::store::Stores;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the services hold `Arc`s to their stores.
#[derive(Clone)]
pub struct AppState {
    /// Template catalog.
    pub catalog: TemplateCatalog,
    /// Owner-scoped project operations.
    pub projects: ProjectService,
    /// Server configuration (read by the auth extractors).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the services over the given stores.
    pub fn new(stores: Stores, config: ServerConfig) -> Self {
        let catalog = TemplateCatalog::new(stores.templates);
        let projects = ProjectService::new(stores.projects, catalog.clone());
        Self {
            catalog,
            projects,
            config: Arc::new(config),
        }
    }
}
