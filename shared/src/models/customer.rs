//! Customer Model

use crate::error::AppError;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use serde::{Deserialize, Serialize};

/// Customer (chamber owner)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// Create customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

impl CustomerCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.contact_person, "contactPerson", MAX_NAME_LEN)?;
        validate_optional_text(&self.contact_phone, "contactPhone", MAX_SHORT_TEXT_LEN)
    }
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

impl CustomerUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserialize_sparse() {
        let customer: Customer = serde_json::from_str(r#"{"id":2,"name":"Acme Hyperbarics"}"#).unwrap();
        assert_eq!(customer.name, "Acme Hyperbarics");
        assert!(customer.contact_email.is_none());
    }

    #[test]
    fn test_customer_create_requires_name() {
        let create = CustomerCreate::default();
        assert_eq!(create.validate().unwrap_err().message, "name is required");

        let create = CustomerCreate {
            name: "Acme".into(),
            contact_person: Some("Dana".into()),
            ..Default::default()
        };
        assert!(create.validate().is_ok());
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["contactPerson"], "Dana");
    }
}
