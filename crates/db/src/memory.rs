//! In-process implementations of the store traits.
//!
//! Used by tests and when the server runs without `DATABASE_URL`. Each
//! method takes the lock once, so every operation is atomic just like a
//! single statement against PostgreSQL. Reads hand out clones.

use async_trait::async_trait;
use shotify_core::platform::PlatformFilter;
use shotify_core::types::{DocumentId, Timestamp, UserId};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::models::template::{NewTemplate, Template, UpdateTemplate};
use crate::store::{ProjectStore, TemplateStore};

/// Sort newest first; documents created at the same instant keep
/// most-recently-inserted first.
fn newest_first<T>(mut docs: Vec<T>, created_at: impl Fn(&T) -> Timestamp) -> Vec<T> {
    docs.reverse();
    docs.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    docs
}

/// Template collection held in memory, in insertion order.
#[derive(Default)]
pub struct MemoryTemplateStore {
    docs: RwLock<Vec<Template>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored document, inactive ones included.
    pub async fn snapshot(&self) -> Vec<Template> {
        self.docs.read().await.clone()
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn insert(&self, doc: &NewTemplate) -> Result<DocumentId, StoreError> {
        let id = Uuid::now_v7();
        self.docs.write().await.push(doc.clone().into_template(id));
        Ok(id)
    }

    async fn insert_many(&self, docs: &[NewTemplate]) -> Result<Vec<DocumentId>, StoreError> {
        let mut guard = self.docs.write().await;
        let mut ids = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = Uuid::now_v7();
            guard.push(doc.clone().into_template(id));
            ids.push(id);
        }
        Ok(ids)
    }

    async fn find_active(&self, filter: PlatformFilter) -> Result<Vec<Template>, StoreError> {
        let matching: Vec<Template> = self
            .docs
            .read()
            .await
            .iter()
            .filter(|t| t.is_active && filter.matches(t.platform))
            .cloned()
            .collect();
        Ok(newest_first(matching, |t| t.created_at))
    }

    async fn find_active_by_id(&self, id: DocumentId) -> Result<Option<Template>, StoreError> {
        Ok(self
            .docs
            .read()
            .await
            .iter()
            .find(|t| t.id == id && t.is_active)
            .cloned())
    }

    async fn update(
        &self,
        id: DocumentId,
        input: &UpdateTemplate,
        updated_at: Timestamp,
    ) -> Result<Option<Template>, StoreError> {
        let mut guard = self.docs.write().await;
        let Some(template) = guard.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        template.name = input.name.clone();
        template.platform = input.platform;
        template.category = input.category.clone();
        template.thumbnail = input.thumbnail.clone();
        template.json_config = input.json_config.clone();
        template.updated_at = updated_at;
        Ok(Some(template.clone()))
    }

    async fn deactivate(&self, id: DocumentId, updated_at: Timestamp) -> Result<bool, StoreError> {
        let mut guard = self.docs.write().await;
        match guard.iter_mut().find(|t| t.id == id) {
            Some(template) => {
                template.is_active = false;
                template.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.docs.read().await.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut guard = self.docs.write().await;
        let removed = guard.len() as u64;
        guard.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Project collection held in memory, in insertion order.
#[derive(Default)]
pub struct MemoryProjectStore {
    docs: RwLock<Vec<Project>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored document regardless of owner.
    pub async fn snapshot(&self) -> Vec<Project> {
        self.docs.read().await.clone()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn insert(&self, doc: &NewProject) -> Result<DocumentId, StoreError> {
        let id = Uuid::now_v7();
        self.docs.write().await.push(doc.clone().into_project(id));
        Ok(id)
    }

    async fn find_by_owner(&self, user_id: UserId) -> Result<Vec<Project>, StoreError> {
        let owned: Vec<Project> = self
            .docs
            .read()
            .await
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(owned, |p| p.created_at))
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Project>, StoreError> {
        Ok(self.docs.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update_owned(
        &self,
        id: DocumentId,
        user_id: UserId,
        patch: &UpdateProject,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, StoreError> {
        let mut guard = self.docs.write().await;
        let Some(project) = guard
            .iter_mut()
            .find(|p| p.id == id && p.user_id == user_id)
        else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            project.name = name.clone();
        }
        if let Some(thumbnail) = &patch.thumbnail {
            project.thumbnail = thumbnail.clone();
        }
        if let Some(config) = &patch.project_config {
            project.project_config = config.clone();
        }
        project.updated_at = updated_at;
        Ok(Some(project.clone()))
    }

    async fn delete_owned(&self, id: DocumentId, user_id: UserId) -> Result<bool, StoreError> {
        let mut guard = self.docs.write().await;
        let before = guard.len();
        guard.retain(|p| !(p.id == id && p.user_id == user_id));
        Ok(guard.len() < before)
    }
}
