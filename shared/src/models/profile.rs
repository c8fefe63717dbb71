//! Profile Model

use crate::error::AppError;
use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text};
use serde::{Deserialize, Serialize};

/// Editable profile details
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// `GET /profile` body: the account plus its profile details
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<ProfileDetails>,
    /// Some backends return the image path at the top level
    #[serde(default)]
    pub image_path: Option<String>,
}

impl ProfileView {
    pub fn image_path(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.image_path.as_deref())
            .or(self.image_path.as_deref())
    }
}

/// `PUT /profile` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_optional_text(&self.full_name, "fullName", MAX_NAME_LEN)?;
        validate_optional_text(&self.bio, "bio", MAX_NOTE_LEN)
    }
}
