use serde::{Deserialize, Serialize};

use crate::constants;

/// A correlation dimension: the field type a cross-case search was run
/// against (file hash, domain, ...). Identified by a stable numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeType {
    pub id: u32,
    pub display_name: String,
}

impl AttributeType {
    pub fn new(id: u32, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// The fixed catalog of built-in correlation attribute types.
    pub fn supported_types() -> Vec<AttributeType> {
        vec![
            AttributeType::new(constants::FILES_TYPE_ID, "Files"),
            AttributeType::new(constants::DOMAIN_TYPE_ID, "Domains"),
            AttributeType::new(constants::EMAIL_TYPE_ID, "Email Addresses"),
            AttributeType::new(constants::PHONE_TYPE_ID, "Phone Numbers"),
            AttributeType::new(constants::USB_ID_TYPE_ID, "USB Devices"),
            AttributeType::new(constants::SSID_TYPE_ID, "Wireless Networks"),
        ]
    }

    /// Resolve a type from a catalog by id. First match wins.
    pub fn resolve(catalog: &[AttributeType], id: u32) -> Option<&AttributeType> {
        catalog.iter().find(|t| t.id == id)
    }
}
