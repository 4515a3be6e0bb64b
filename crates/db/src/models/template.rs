//! Template document and DTOs.

use serde::{Deserialize, Serialize};
use shotify_core::canvas::TemplateConfig;
use shotify_core::platform::Platform;
use shotify_core::seed::SeedTemplate;
use shotify_core::types::{DocumentId, Timestamp};
use sqlx::FromRow;

/// A stored template.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: DocumentId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub platform: Platform,
    pub category: String,
    pub thumbnail: String,
    #[sqlx(json)]
    pub json_config: TemplateConfig,
    /// `false` means soft-deleted: hidden from every catalog read.
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Template fields as inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub name: String,
    pub platform: Platform,
    pub category: String,
    pub thumbnail: String,
    pub json_config: TemplateConfig,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewTemplate {
    /// Attach the id generated by the store.
    pub fn into_template(self, id: DocumentId) -> Template {
        Template {
            id,
            name: self.name,
            platform: self.platform,
            category: self.category,
            thumbnail: self.thumbnail,
            json_config: self.json_config,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// DTO for creating a template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    pub name: String,
    pub platform: Platform,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    pub json_config: TemplateConfig,
}

/// DTO for updating a template. Every mutable field is replaced; the
/// active flag is not part of it.
pub type UpdateTemplate = CreateTemplate;

impl From<SeedTemplate> for CreateTemplate {
    fn from(seed: SeedTemplate) -> Self {
        Self {
            name: seed.name,
            platform: seed.platform,
            category: seed.category,
            thumbnail: seed.thumbnail,
            json_config: seed.json_config,
        }
    }
}
