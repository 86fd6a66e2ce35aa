//! Validation Module
//!
//! Turns a loosely-typed JSON body into a [`NewAddress`], stopping at the first
//! rule that fails.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::Error as _;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::book::{NewAddress, STATE_CODE_LENGTH, ZIP_LENGTH};

/// Required fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 6] = ["firstName", "lastName", "address1", "city", "state", "zip"];

fn zip_pattern() -> &'static Regex {
    static ZIP: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` in the regex crate is Unicode-aware.
    ZIP.get_or_init(|| {
        Regex::new(&format!("^[0-9]{{{}}}$", ZIP_LENGTH)).expect("zip pattern is valid")
    })
}

// == Validation Error ==
/// A create request that broke one of the field rules.
///
/// The display text is sent to the client verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("String '{0}' is required")]
    MissingField(&'static str),

    #[error("State code must be two characters")]
    StateLength,

    #[error("Provide a 5 digit zipcode")]
    ZipFormat,
}

// == Address Candidate ==
/// The raw fields of a create request, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressCandidate {
    fields: Map<String, Value>,
}

impl AddressCandidate {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Parses a request body.
    ///
    /// A zero-length body or a top-level array yields an empty candidate.
    /// Only objects and arrays are accepted at the top level; whitespace-only
    /// bodies, scalars and `null` are parse errors.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_slice(body)? {
            Value::Object(fields) => Ok(Self::new(fields)),
            Value::Array(_) => Ok(Self::default()),
            _ => Err(serde_json::Error::custom(
                "top-level JSON value must be an object or array",
            )),
        }
    }

    fn string_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    fn required(&self, name: &'static str) -> Result<String, ValidationError> {
        match self.string_field(name) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ValidationError::MissingField(name)),
        }
    }

    /// Checks required fields in [`REQUIRED_FIELDS`] order, then the state
    /// code length, then the zipcode format.
    pub fn validate(&self) -> Result<NewAddress, ValidationError> {
        let first_name = self.required(REQUIRED_FIELDS[0])?;
        let last_name = self.required(REQUIRED_FIELDS[1])?;
        let address1 = self.required(REQUIRED_FIELDS[2])?;
        let city = self.required(REQUIRED_FIELDS[3])?;
        let state = self.required(REQUIRED_FIELDS[4])?;
        let zip = self.required(REQUIRED_FIELDS[5])?;

        // Length in UTF-16 code units, so a non-BMP character counts as two
        if state.encode_utf16().count() != STATE_CODE_LENGTH {
            return Err(ValidationError::StateLength);
        }
        if !zip_pattern().is_match(&zip) {
            return Err(ValidationError::ZipFormat);
        }

        Ok(NewAddress {
            first_name,
            last_name,
            address1,
            address2: self.string_field("address2").map(str::to_string),
            city,
            state,
            zip,
        })
    }
}
