//! PostgreSQL implementations of the store traits.
//!
//! Each repository owns a pool handle and stores the nested configuration
//! as a single JSONB column.

pub mod project_repo;
pub mod template_repo;

pub use project_repo::ProjectRepo;
pub use template_repo::TemplateRepo;
