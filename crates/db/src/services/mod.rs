//! Catalog and project operations on top of the store traits.

pub mod project_service;
pub mod template_catalog;

pub use project_service::ProjectService;
pub use template_catalog::{SeedOutcome, TemplateCatalog};
