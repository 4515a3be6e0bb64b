/// Domain error taxonomy shared by every layer.
///
/// Ownership mismatches surface as [`CoreError::NotFound`] under the default
/// policy (see [`crate::access::OwnershipPolicy`]); `Forbidden` is only
/// produced by the admin role gate or by the `DistinguishForbidden` policy.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on any displayable id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
