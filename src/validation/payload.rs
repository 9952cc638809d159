use crate::core::error::ValidationError;
use crate::models::user::UserPayload;

/// A payload whose name and bio are both present and non-blank
#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedUser {
    pub name: String,
    pub bio: String,
}

/// Check that both required fields carry a non-empty value
///
/// Whitespace-only values count as empty. Values are stored untrimmed.
pub fn validate_user_payload(payload: UserPayload) -> Result<ValidatedUser, ValidationError> {
    let name = required_field("name", payload.name)?;
    let bio = required_field("bio", payload.bio)?;

    Ok(ValidatedUser { name, bio })
}

fn required_field(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field.to_string())),
        Some(v) if v.trim().is_empty() => Err(ValidationError::EmptyField(field.to_string())),
        Some(v) => Ok(v),
    }
}
