use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier assigned by the store
    pub id: String,
    pub name: String,
    pub bio: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bio: bio.into(),
        }
    }
}

/// Request body for creating or replacing a user
///
/// Fields are optional so that missing values surface as a 400 instead of
/// an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessageResponse {
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}
