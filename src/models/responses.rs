//! Response DTOs for the address book API
//!
//! Defines the structure of outgoing HTTP response bodies. Address records
//! themselves serialize straight from [`crate::book::AddressRecord`].

use serde::Serialize;

/// Response body for a successful create (POST /address)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Id assigned to the new record
    pub id: u64,
}

impl CreatedResponse {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Error response body for rejected authorization
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Message wrapper used inside server error bodies
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub message: String,
    /// Error variant, only present in development bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Body of a 500 response.
///
/// Production bodies hide everything behind a fixed message; development
/// bodies repeat the raw error text and name the error kind.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerErrorResponse {
    Generic {
        error: ErrorMessage,
    },
    Detailed {
        message: String,
        error: ErrorMessage,
    },
}

impl ServerErrorResponse {
    /// `{"error": {"message": "server error"}}`
    pub fn generic() -> Self {
        ServerErrorResponse::Generic {
            error: ErrorMessage {
                message: "server error".to_string(),
                kind: None,
            },
        }
    }

    /// `{"message": ..., "error": {"message": ..., "kind": ...}}`
    pub fn detailed(kind: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        ServerErrorResponse::Detailed {
            error: ErrorMessage {
                message: message.clone(),
                kind: Some(kind.into()),
            },
            message,
        }
    }
}
