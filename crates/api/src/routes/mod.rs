pub mod admin;
pub mod health;
pub mod projects;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                         list (?platform=)
/// /templates/{id}                    get
///
/// /projects                          list, create
/// /projects/{id}                     get, update, delete
///
/// /admin/templates                   create (admin only)
/// /admin/templates/seed              seed (?force=)
/// /admin/templates/{id}              update, soft delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", templates::router())
        .nest("/projects", projects::router())
        .nest("/admin", admin::router())
}
