//! Project document and DTOs.

use serde::{Deserialize, Serialize};
use shotify_core::access::Owned;
use shotify_core::canvas::ProjectConfig;
use shotify_core::types::{DocumentId, Timestamp, UserId};
use sqlx::FromRow;

use crate::models::template::Template;

/// A stored project. `user_id` never changes after insert.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DocumentId,
    pub user_id: UserId,
    /// Template the configuration was cloned from. Provenance only.
    pub template_id: DocumentId,
    pub name: String,
    pub thumbnail: String,
    #[sqlx(json)]
    pub project_config: ProjectConfig,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Project {
    fn owner(&self) -> UserId {
        self.user_id
    }
}

/// Project fields as inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub user_id: UserId,
    pub template_id: DocumentId,
    pub name: String,
    pub thumbnail: String,
    pub project_config: ProjectConfig,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewProject {
    /// Attach the id generated by the store.
    pub fn into_project(self, id: DocumentId) -> Project {
        Project {
            id,
            user_id: self.user_id,
            template_id: self.template_id,
            name: self.name,
            thumbnail: self.thumbnail,
            project_config: self.project_config,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// DTO for creating a project from a template.
///
/// Both fields default to empty so a missing field is reported as an
/// invalid argument by the service rather than as a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub name: String,
}

/// DTO for updating a project. Present fields replace the stored value;
/// absent fields are left alone. `project_config` is replaced whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub project_config: Option<ProjectConfig>,
}

/// A project together with its originating template, when that template
/// is still active.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTemplate {
    #[serde(flatten)]
    pub project: Project,
    pub template: Option<Template>,
}
