//! Repository for the `templates` table.

use async_trait::async_trait;
use shotify_core::platform::PlatformFilter;
use shotify_core::types::{DocumentId, Timestamp};
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};

use crate::error::StoreError;
use crate::models::template::{NewTemplate, Template, UpdateTemplate};
use crate::store::TemplateStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, platform, category, thumbnail, json_config, \
     is_active, created_at, updated_at";

/// Provides catalog storage on PostgreSQL.
#[derive(Clone)]
pub struct TemplateRepo {
    pool: PgPool,
}

impl TemplateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_one<'e, E: PgExecutor<'e>>(
        executor: E,
        doc: &NewTemplate,
    ) -> Result<DocumentId, sqlx::Error> {
        sqlx::query_scalar::<_, DocumentId>(
            "INSERT INTO templates \
                (name, platform, category, thumbnail, json_config, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(&doc.name)
        .bind(doc.platform.as_str())
        .bind(&doc.category)
        .bind(&doc.thumbnail)
        .bind(Json(&doc.json_config))
        .bind(doc.is_active)
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .fetch_one(executor)
        .await
    }
}

#[async_trait]
impl TemplateStore for TemplateRepo {
    async fn insert(&self, doc: &NewTemplate) -> Result<DocumentId, StoreError> {
        Ok(Self::insert_one(&self.pool, doc).await?)
    }

    async fn insert_many(&self, docs: &[NewTemplate]) -> Result<Vec<DocumentId>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(docs.len());
        for doc in docs {
            ids.push(Self::insert_one(&mut *tx, doc).await?);
        }
        tx.commit().await?;
        Ok(ids)
    }

    async fn find_active(&self, filter: PlatformFilter) -> Result<Vec<Template>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates \
             WHERE is_active = true \
               AND ($1::text IS NULL OR platform = $1 OR platform = 'both') \
             ORDER BY created_at DESC"
        );
        let templates = sqlx::query_as::<_, Template>(&query)
            .bind(filter.platform().map(|p| p.as_str()))
            .fetch_all(&self.pool)
            .await?;
        Ok(templates)
    }

    async fn find_active_by_id(&self, id: DocumentId) -> Result<Option<Template>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1 AND is_active = true");
        let template = sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(template)
    }

    async fn update(
        &self,
        id: DocumentId,
        input: &UpdateTemplate,
        updated_at: Timestamp,
    ) -> Result<Option<Template>, StoreError> {
        let query = format!(
            "UPDATE templates SET \
                name = $2, \
                platform = $3, \
                category = $4, \
                thumbnail = $5, \
                json_config = $6, \
                updated_at = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.platform.as_str())
            .bind(&input.category)
            .bind(&input.thumbnail)
            .bind(Json(&input.json_config))
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await?;
        Ok(template)
    }

    async fn deactivate(&self, id: DocumentId, updated_at: Timestamp) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE templates SET is_active = false, updated_at = $2 WHERE id = $1")
                .bind(id)
                .bind(updated_at)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM templates")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM templates")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
