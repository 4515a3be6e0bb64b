//! Validation of user-supplied display names.

use crate::error::CoreError;

/// Maximum length of a template or project name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validate a display name: must be non-empty after trimming and within
/// [`MAX_NAME_LENGTH`] characters. `field` names the input in the message.
pub fn validate_name(field: &str, name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidArgument(format!("{field} is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::InvalidArgument(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
