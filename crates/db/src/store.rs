//! The document-store boundary.
//!
//! Every method is a single store operation, atomic at document
//! granularity. No method spans several documents in a transaction except
//! `insert_many`, which may but need not.

use std::sync::Arc;

use async_trait::async_trait;
use shotify_core::platform::PlatformFilter;
use shotify_core::types::{DocumentId, Timestamp, UserId};

use crate::error::StoreError;
use crate::memory::{MemoryProjectStore, MemoryTemplateStore};
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::models::template::{NewTemplate, Template, UpdateTemplate};
use crate::repositories::{ProjectRepo, TemplateRepo};
use crate::DbPool;

/// Storage for the `templates` collection.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Insert one document, returning the generated id.
    async fn insert(&self, doc: &NewTemplate) -> Result<DocumentId, StoreError>;

    /// Insert several documents, returning their ids in input order.
    async fn insert_many(&self, docs: &[NewTemplate]) -> Result<Vec<DocumentId>, StoreError>;

    /// Active templates passing `filter`, newest first.
    async fn find_active(&self, filter: PlatformFilter) -> Result<Vec<Template>, StoreError>;

    /// The template with `id` if it exists and is active.
    async fn find_active_by_id(&self, id: DocumentId) -> Result<Option<Template>, StoreError>;

    /// Replace the mutable fields of the template with `id`, whatever its
    /// active state. Returns `None` if no document has that id.
    async fn update(
        &self,
        id: DocumentId,
        input: &UpdateTemplate,
        updated_at: Timestamp,
    ) -> Result<Option<Template>, StoreError>;

    /// Clear the active flag. Returns `true` if a document with `id` exists
    /// (already inactive included).
    async fn deactivate(&self, id: DocumentId, updated_at: Timestamp) -> Result<bool, StoreError>;

    /// Number of stored documents, active or not.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Remove every document. Returns how many were removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Verify the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Storage for the `projects` collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert one document, returning the generated id.
    async fn insert(&self, doc: &NewProject) -> Result<DocumentId, StoreError>;

    /// Projects whose owner is `user_id`, newest first.
    async fn find_by_owner(&self, user_id: UserId) -> Result<Vec<Project>, StoreError>;

    /// The project with `id`, whoever owns it.
    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Project>, StoreError>;

    /// Apply `patch` to the project matching both `id` and `user_id` in one
    /// conditional update. Returns `None` when nothing matched.
    async fn update_owned(
        &self,
        id: DocumentId,
        user_id: UserId,
        patch: &UpdateProject,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, StoreError>;

    /// Permanently delete the project matching both `id` and `user_id`.
    /// Returns `true` if a document was removed.
    async fn delete_owned(&self, id: DocumentId, user_id: UserId) -> Result<bool, StoreError>;
}

/// The pair of collections the services run against.
#[derive(Clone)]
pub struct Stores {
    pub templates: Arc<dyn TemplateStore>,
    pub projects: Arc<dyn ProjectStore>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            templates: Arc::new(TemplateRepo::new(pool.clone())),
            projects: Arc::new(ProjectRepo::new(pool)),
        }
    }

    /// Process-local stores. Contents are lost on exit.
    pub fn in_memory() -> Self {
        Self {
            templates: Arc::new(MemoryTemplateStore::new()),
            projects: Arc::new(MemoryProjectStore::new()),
        }
    }
}
