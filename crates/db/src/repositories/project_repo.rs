//! Repository for the `projects` table.
//!
//! Update and delete filter on `(id, user_id)` in the statement itself, so
//! an ownership check done before the call is re-checked atomically.

use async_trait::async_trait;
use shotify_core::types::{DocumentId, Timestamp, UserId};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::store::ProjectStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, template_id, name, thumbnail, project_config, created_at, updated_at";

/// Provides project storage on PostgreSQL.
#[derive(Clone)]
pub struct ProjectRepo {
    pool: PgPool,
}

impl ProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepo {
    async fn insert(&self, doc: &NewProject) -> Result<DocumentId, StoreError> {
        let id = sqlx::query_scalar::<_, DocumentId>(
            "INSERT INTO projects \
                (user_id, template_id, name, thumbnail, project_config, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(doc.user_id)
        .bind(doc.template_id)
        .bind(&doc.name)
        .bind(&doc.thumbnail)
        .bind(Json(&doc.project_config))
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_by_owner(&self, user_id: UserId) -> Result<Vec<Project>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC"
        );
        let projects = sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(project)
    }

    async fn update_owned(
        &self,
        id: DocumentId,
        user_id: UserId,
        patch: &UpdateProject,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, StoreError> {
        let query = format!(
            "UPDATE projects SET \
                name = COALESCE($3, name), \
                thumbnail = COALESCE($4, thumbnail), \
                project_config = COALESCE($5, project_config), \
                updated_at = $6 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&patch.name)
            .bind(&patch.thumbnail)
            .bind(patch.project_config.as_ref().map(Json))
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await?;
        Ok(project)
    }

    async fn delete_owned(&self, id: DocumentId, user_id: UserId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
