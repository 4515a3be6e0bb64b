//! Route definitions for template administration.
//!
//! Every handler takes [`crate::middleware::rbac::RequireAdmin`].

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::admin_templates;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /templates            -> create
/// POST   /templates/seed       -> seed
/// PUT    /templates/{id}       -> update
/// DELETE /templates/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", post(admin_templates::create))
        .route("/templates/seed", post(admin_templates::seed))
        .route(
            "/templates/{id}",
            put(admin_templates::update).delete(admin_templates::delete),
        )
}
