use crate::error::CoreError;

/// Identifier of a stored document (template or project).
pub type DocumentId = uuid::Uuid;

/// Identifier of a user as supplied by the identity resolver.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an identifier received at the request boundary.
///
/// Empty and malformed strings are rejected with
/// [`CoreError::InvalidArgument`] so they never reach a store.
pub fn parse_id(raw: &str) -> Result<DocumentId, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidArgument("id is required".to_string()));
    }
    uuid::Uuid::parse_str(trimmed)
        .map_err(|_| CoreError::InvalidArgument(format!("malformed id '{trimmed}'")))
}
