//! Handlers for template administration (admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use shotify_db::models::template::{CreateTemplate, Template, UpdateTemplate};
use shotify_db::services::SeedOutcome;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::SeedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a seed response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// Whether the default set was written.
    pub seeded: bool,
    /// Templates inserted by this call.
    pub inserted: usize,
    /// Documents already present when seeding was skipped.
    pub existing: u64,
}

impl From<SeedOutcome> for SeedReport {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::Seeded { inserted } => Self {
                seeded: true,
                inserted,
                existing: 0,
            },
            SeedOutcome::Skipped { existing } => Self {
                seeded: false,
                inserted: 0,
                existing,
            },
        }
    }
}

/// POST /api/v1/admin/templates
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTemplate>,
) -> AppResult<(StatusCode, Json<DataResponse<Template>>)> {
    let template = state.catalog.create(input).await?;
    tracing::info!(admin_id = %admin.user_id, template_id = %template.id, "Admin created template");
    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// PUT /api/v1/admin/templates/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateTemplate>,
) -> AppResult<Json<DataResponse<Template>>> {
    let template = state.catalog.update(&id, input).await?;
    Ok(Json(DataResponse { data: template }))
}

/// DELETE /api/v1/admin/templates/{id}
///
/// Soft delete: the template disappears from the catalog but projects
/// created from it are untouched.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.catalog.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/templates/seed?force=
pub async fn seed(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SeedParams>,
) -> AppResult<Json<DataResponse<SeedReport>>> {
    let outcome = state.catalog.seed(params.force).await?;
    tracing::info!(admin_id = %admin.user_id, force = params.force, ?outcome, "Admin seeded templates");
    Ok(Json(DataResponse {
        data: outcome.into(),
    }))
}
