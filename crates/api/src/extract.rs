//! Request extractors that report failures through [`AppError`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use shotify_core::error::CoreError;

use crate::error::AppError;

/// JSON request body. A body that fails to decode into `T` is an invalid
/// argument, reported in the usual `{ "error", "code" }` shape.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<CreateProject>) -> AppResult<StatusCode> { .. }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::InvalidArgument(rejection.body_text()))
    }
}

/// Query string parameters, with parse failures reported like [`AppJson`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::InvalidArgument(rejection.body_text()))
    }
}
