//! Project operations behind the ownership gate.
//!
//! Every entry point takes the caller's user id as resolved upstream.
//! `list` and `delete` filter by owner inside the store call; `get` and
//! `update` fetch once and compare through the [`OwnershipPolicy`], and
//! `update` then writes with an `(id, owner)` filter so the check holds
//! at write time too.

use std::sync::Arc;

use shotify_core::access::{retain_owned, OwnershipPolicy, OWNERSHIP_POLICY};
use shotify_core::error::CoreError;
use shotify_core::naming::validate_name;
use shotify_core::types::{parse_id, UserId};

use crate::models::project::{
    CreateProject, NewProject, Project, ProjectWithTemplate, UpdateProject,
};
use crate::services::template_catalog::TemplateCatalog;
use crate::store::ProjectStore;

const ENTITY: &str = "Project";

/// Project operations. Cheap to clone.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
    catalog: TemplateCatalog,
    policy: OwnershipPolicy,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>, catalog: TemplateCatalog) -> Self {
        Self::with_policy(store, catalog, OWNERSHIP_POLICY)
    }

    pub fn with_policy(
        store: Arc<dyn ProjectStore>,
        catalog: TemplateCatalog,
        policy: OwnershipPolicy,
    ) -> Self {
        Self {
            store,
            catalog,
            policy,
        }
    }

    /// Clone an active template into a new project owned by `uid`.
    pub async fn create(&self, uid: UserId, input: &CreateProject) -> Result<Project, CoreError> {
        validate_name("name", &input.name)?;
        if input.template_id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "templateId is required".to_string(),
            ));
        }

        let template = self
            .catalog
            .get_by_id(&input.template_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Template", input.template_id.trim()))?;

        let now = chrono::Utc::now();
        let doc = NewProject {
            user_id: uid,
            template_id: template.id,
            name: input.name.trim().to_string(),
            thumbnail: template.thumbnail,
            // Owned copy: later edits to the project never reach the template.
            project_config: template.json_config,
            created_at: now,
            updated_at: now,
        };
        let id = self.store.insert(&doc).await?;
        tracing::info!(
            project_id = %id,
            user_id = %uid,
            template_id = %doc.template_id,
            "Project created"
        );
        Ok(doc.into_project(id))
    }

    /// Every project owned by `uid`, newest first.
    pub async fn list(&self, uid: UserId) -> Result<Vec<Project>, CoreError> {
        let fetched = self.store.find_by_owner(uid).await?;
        let (projects, dropped) = retain_owned(uid, fetched);
        if dropped > 0 {
            tracing::warn!(
                user_id = %uid,
                dropped,
                "Store returned projects owned by other users; filtered out"
            );
        }
        Ok(projects)
    }

    /// The project with `id` if `uid` owns it.
    pub async fn get(&self, uid: UserId, id: &str) -> Result<Project, CoreError> {
        let project_id = parse_id(id)?;
        let fetched = self.store.find_by_id(project_id).await?;
        self.admit(uid, project_id.to_string(), fetched)
    }

    /// The project plus its originating template when that template is
    /// still active.
    pub async fn get_with_template(
        &self,
        uid: UserId,
        id: &str,
    ) -> Result<ProjectWithTemplate, CoreError> {
        let project = self.get(uid, id).await?;
        let template = self
            .catalog
            .get_by_id(&project.template_id.to_string())
            .await?;
        Ok(ProjectWithTemplate { project, template })
    }

    /// Apply a partial update. See [`UpdateProject`] for the merge rule.
    pub async fn update(
        &self,
        uid: UserId,
        id: &str,
        patch: &UpdateProject,
    ) -> Result<Project, CoreError> {
        let project_id = parse_id(id)?;
        if let Some(name) = &patch.name {
            validate_name("name", name)?;
        }
        if let Some(config) = &patch.project_config {
            config.validate()?;
        }
        // Stored names are trimmed, as on create.
        let patch = UpdateProject {
            name: patch.name.as_deref().map(|name| name.trim().to_string()),
            ..patch.clone()
        };

        let fetched = self.store.find_by_id(project_id).await?;
        self.admit(uid, project_id.to_string(), fetched)?;

        let updated = self
            .store
            .update_owned(project_id, uid, &patch, chrono::Utc::now())
            .await?
            .ok_or_else(|| {
                tracing::debug!(project_id = %project_id, "Project vanished before update");
                CoreError::not_found(ENTITY, project_id)
            })?;
        tracing::info!(
            project_id = %project_id,
            user_id = %uid,
            config_replaced = patch.project_config.is_some(),
            "Project updated"
        );
        Ok(updated)
    }

    /// Permanently delete a project owned by `uid`.
    pub async fn delete(&self, uid: UserId, id: &str) -> Result<(), CoreError> {
        let project_id = parse_id(id)?;
        if self.store.delete_owned(project_id, uid).await? {
            tracing::info!(project_id = %project_id, user_id = %uid, "Project deleted");
            return Ok(());
        }

        let id = project_id.to_string();
        match self.policy {
            OwnershipPolicy::HideExistence => Err(CoreError::not_found(ENTITY, id)),
            OwnershipPolicy::DistinguishForbidden => {
                match self.store.find_by_id(project_id).await? {
                    Some(_) => Err(self.policy.mismatch(ENTITY, &id)),
                    None => Err(CoreError::not_found(ENTITY, id)),
                }
            }
        }
    }

    fn admit(
        &self,
        uid: UserId,
        id: String,
        fetched: Option<Project>,
    ) -> Result<Project, CoreError> {
        self.policy.admit(uid, ENTITY, &id, fetched).inspect_err(|_| {
            tracing::debug!(project_id = %id, user_id = %uid, "Project not visible to caller");
        })
    }
}
