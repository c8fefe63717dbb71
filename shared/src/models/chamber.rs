//! Chamber Model

use super::customer::Customer;
use crate::error::AppError;
use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_ref, validate_required_text,
};
use serde::{Deserialize, Serialize};

/// Oxygen chamber unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chamber {
    pub id: i64,
    pub serial_number: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub customer_id: Option<i64>,
    /// Date string as stored by the backend (`YYYY-MM-DD`)
    #[serde(default)]
    pub installation_date: Option<String>,
    #[serde(default)]
    pub warranty_expiry_date: Option<String>,
    #[serde(default, rename = "Customer", skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl Chamber {
    /// `Model (SN: serial)` as shown in headers
    pub fn label(&self) -> String {
        format!("{} (SN: {})", self.model_name, self.serial_number)
    }
}

/// Chamber summary embedded in issues (`"Chamber": {...}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChamberRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl ChamberRef {
    pub fn label(&self) -> String {
        format!(
            "{} (SN: {})",
            self.model_name.as_deref().unwrap_or("-"),
            self.serial_number.as_deref().unwrap_or("-")
        )
    }
}

/// Create chamber payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamberCreate {
    pub serial_number: String,
    pub model_name: String,
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiry_date: Option<String>,
}

impl ChamberCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.serial_number, "serialNumber", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.model_name, "modelName", MAX_NAME_LEN)?;
        validate_required_ref(self.customer_id, "customerId")
    }
}

/// Update chamber payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expiry_date: Option<String>,
}

impl ChamberUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(serial) = &self.serial_number {
            validate_required_text(serial, "serialNumber", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(model) = &self.model_name {
            validate_required_text(model, "modelName", MAX_NAME_LEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_chamber_deserialize_with_customer() {
        let json = r#"{
            "id": 3,
            "serialNumber": "OX-1001",
            "modelName": "Hyperlite 2",
            "customerId": 1,
            "installationDate": "2024-03-01",
            "Customer": {"id": 1, "name": "Acme"}
        }"#;
        let chamber: Chamber = serde_json::from_str(json).unwrap();
        assert_eq!(chamber.serial_number, "OX-1001");
        assert_eq!(chamber.customer.unwrap().name, "Acme");
    }

    #[test]
    fn test_labels() {
        let chamber_ref = ChamberRef::default();
        assert_eq!(chamber_ref.label(), "- (SN: -)");

        let chamber_ref = ChamberRef {
            id: Some(1),
            serial_number: Some("OX-1".into()),
            model_name: Some("Vita".into()),
        };
        assert_eq!(chamber_ref.label(), "Vita (SN: OX-1)");
    }

    #[test]
    fn test_chamber_create_required_fields() {
        let mut create = ChamberCreate {
            serial_number: "OX-9".into(),
            model_name: "Vita".into(),
            ..Default::default()
        };
        let err = create.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "customerId is required");

        create.customer_id = Some(1);
        assert!(create.validate().is_ok());

        create.serial_number.clear();
        assert_eq!(create.validate().unwrap_err().message, "serialNumber is required");
    }
}
