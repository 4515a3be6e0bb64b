//! Handlers for the public `/templates` resource.

use axum::extract::{Path, State};
use axum::Json;
use shotify_core::error::CoreError;
use shotify_db::models::template::Template;

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::query::PlatformParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/templates?platform=
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PlatformParams>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let templates = state.catalog.list(&params.platform).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/templates/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Template>>> {
    let template = state
        .catalog
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", &id)))?;
    Ok(Json(DataResponse { data: template }))
}
