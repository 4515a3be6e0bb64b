//! The template catalog: admin-managed, soft-deleted, seeded at startup.

use std::sync::Arc;

use shotify_core::error::CoreError;
use shotify_core::naming::validate_name;
use shotify_core::platform::PlatformFilter;
use shotify_core::seed::default_templates;
use shotify_core::types::parse_id;

use crate::models::template::{CreateTemplate, NewTemplate, Template, UpdateTemplate};
use crate::store::TemplateStore;

/// Result of [`TemplateCatalog::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held documents; nothing was written.
    Skipped { existing: u64 },
    /// The default set was inserted.
    Seeded { inserted: usize },
}

/// Catalog operations. Cheap to clone.
#[derive(Clone)]
pub struct TemplateCatalog {
    store: Arc<dyn TemplateStore>,
}

impl TemplateCatalog {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    fn validate(input: &CreateTemplate) -> Result<(), CoreError> {
        validate_name("name", &input.name)?;
        input.json_config.validate()
    }

    fn new_document(input: CreateTemplate) -> NewTemplate {
        let now = chrono::Utc::now();
        NewTemplate {
            name: input.name,
            platform: input.platform,
            category: input.category,
            thumbnail: input.thumbnail,
            json_config: input.json_config,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store a new active template and return it with its assigned id.
    pub async fn create(&self, input: CreateTemplate) -> Result<Template, CoreError> {
        Self::validate(&input)?;
        let doc = Self::new_document(input);
        let id = self.store.insert(&doc).await?;
        tracing::info!(template_id = %id, name = %doc.name, "Template created");
        Ok(doc.into_template(id))
    }

    /// Active templates, newest first. `platform` is a raw filter value:
    /// empty or `all` disables filtering, an unrecognised value keeps only
    /// `both` templates.
    pub async fn list(&self, platform: &str) -> Result<Vec<Template>, CoreError> {
        let filter = PlatformFilter::parse(platform);
        Ok(self.store.find_active(filter).await?)
    }

    /// The active template with `id`, or `None` when it is missing or
    /// soft-deleted.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Template>, CoreError> {
        let id = parse_id(id)?;
        let template = self.store.find_active_by_id(id).await?;
        if template.is_none() {
            tracing::debug!(template_id = %id, "Template not found or inactive");
        }
        Ok(template)
    }

    /// Replace the mutable fields of a template. The active flag is left
    /// as stored, so a soft-deleted template stays deleted.
    pub async fn update(&self, id: &str, input: UpdateTemplate) -> Result<Template, CoreError> {
        let id = parse_id(id)?;
        Self::validate(&input)?;
        let template = self
            .store
            .update(id, &input, chrono::Utc::now())
            .await?
            .ok_or_else(|| CoreError::not_found("Template", id))?;
        tracing::info!(template_id = %id, "Template updated");
        Ok(template)
    }

    /// Soft-delete. Deleting an already inactive template succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let id = parse_id(id)?;
        if !self.store.deactivate(id, chrono::Utc::now()).await? {
            return Err(CoreError::not_found("Template", id));
        }
        tracing::info!(template_id = %id, "Template deactivated");
        Ok(())
    }

    /// Insert the canonical default set.
    ///
    /// Without `force` this does nothing once any template exists. With
    /// `force` every template document is purged first, inactive ones
    /// included.
    pub async fn seed(&self, force: bool) -> Result<SeedOutcome, CoreError> {
        if force {
            let removed = self.store.delete_all().await?;
            tracing::warn!(removed, "Forced re-seed purged existing templates");
        } else {
            let existing = self.store.count().await?;
            if existing > 0 {
                tracing::debug!(existing, "Templates already present, skipping seed");
                return Ok(SeedOutcome::Skipped { existing });
            }
        }

        let docs: Vec<NewTemplate> = default_templates()
            .into_iter()
            .map(|seed| Self::new_document(CreateTemplate::from(seed)))
            .collect();
        let ids = self.store.insert_many(&docs).await?;
        tracing::info!(inserted = ids.len(), "Default templates seeded");
        Ok(SeedOutcome::Seeded {
            inserted: ids.len(),
        })
    }

    /// Whether the backing store answers.
    pub async fn ping(&self) -> Result<(), CoreError> {
        Ok(self.store.ping().await?)
    }
}
