//! User Model

use super::customer::Customer;
use super::role::{Role, RoleRef};
use crate::error::AppError;
use crate::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_optional_text,
    validate_required_ref, validate_required_text,
};
use serde::{Deserialize, Serialize};

/// User account as returned by the backend (password never included)
///
/// The role arrives either flat (`"role": "Engineer"`, login response) or
/// as a nested association (`"Role": {"name": "Engineer"}`, `/auth/me` and
/// admin listings). [`User::role_name`] normalizes both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role_ref: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, rename = "Customer", skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl User {
    /// Role name, preferring the nested association over the flat field
    pub fn role_name(&self) -> Option<&str> {
        self.role_ref
            .as_ref()
            .map(|r| r.name.as_str())
            .or(self.role.as_deref())
    }

    /// Parsed role; `None` when missing or not one of the known roles
    pub fn role(&self) -> Option<Role> {
        self.role_name().and_then(Role::parse)
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
}

impl UserCreate {
    /// Required-field checks of the user form
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.username, "username", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")?;
        validate_required_text(&self.password, "password", MAX_PASSWORD_LEN)?;
        if self.role.requires_customer() {
            validate_required_ref(self.customer_id, "customerId")?;
        }
        Ok(())
    }
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(username) = &self.username {
            validate_required_text(username, "username", MAX_NAME_LEN)?;
        }
        if let Some(email) = &self.email {
            validate_email(email, "email")?;
        }
        validate_optional_text(&self.password, "password", MAX_PASSWORD_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_role_from_nested_association() {
        let json = r#"{"id":7,"username":"eve","email":"eve@oxy.example","Role":{"name":"Engineer"}}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role_name(), Some("Engineer"));
        assert_eq!(user.role(), Some(Role::Engineer));
    }

    #[test]
    fn test_role_from_flat_field() {
        let json = r#"{"id":1,"username":"op","role":"Operator","customerId":3}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), Some(Role::Operator));
        assert_eq!(user.customer_id, Some(3));
    }

    #[test]
    fn test_unknown_role_is_kept_verbatim() {
        let json = r#"{"id":1,"username":"x","role":"Auditor"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role_name(), Some("Auditor"));
        assert_eq!(user.role(), None);
    }

    #[test]
    fn test_user_create_requires_customer_for_operator() {
        let mut create = UserCreate {
            username: "op".into(),
            email: "op@oxy.example".into(),
            password: "secret".into(),
            role: Role::Operator,
            customer_id: None,
        };
        let err = create.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "customerId is required");

        create.customer_id = Some(2);
        assert!(create.validate().is_ok());

        create.role = Role::Engineer;
        create.customer_id = None;
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_user_create_serializes_role_name() {
        let create = UserCreate {
            username: "boss".into(),
            email: "boss@oxy.example".into(),
            password: "pw".into(),
            role: Role::Admin,
            customer_id: None,
        };
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["role"], "Oxygens Admin");
        assert!(json.get("customerId").is_none());
    }
}
