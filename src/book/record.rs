//! Address Record Module
//!
//! The stored entity and its validated, id-less form.

use serde::Serialize;

// == Address Record ==
/// A stored postal address with a service-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Unique id, never reused
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    /// Second address line, only serialized when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl AddressRecord {
    /// Attaches an id to a validated address.
    pub fn from_new(id: u64, address: NewAddress) -> Self {
        Self {
            id,
            first_name: address.first_name,
            last_name: address.last_name,
            address1: address.address1,
            address2: address.address2,
            city: address.city,
            state: address.state,
            zip: address.zip,
        }
    }

    /// The record every fresh address book starts with.
    pub fn seed() -> Self {
        Self {
            id: 0,
            first_name: "Michael".to_string(),
            last_name: "Meyers".to_string(),
            address1: "1245 Main st".to_string(),
            address2: Some("APT B".to_string()),
            city: "Jolla".to_string(),
            state: "NV".to_string(),
            zip: "38389".to_string(),
        }
    }
}

// == New Address ==
/// An address that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}
