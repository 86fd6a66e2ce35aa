//! Error types for the address book server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::book::ValidationError;
use crate::models::{ErrorResponse, ServerErrorResponse};

/// Body text for every rejected bearer token.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access, please provide proper authentication";

// == App Error Enum ==
/// Unified error type for the address book server.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, malformed, or wrong bearer token
    #[error("Unauthorized access, please provide proper authentication")]
    Unauthorized,

    /// Create request failed a field rule
    #[error(transparent)]
    BadRequest(#[from] ValidationError),

    /// Request body claimed to be JSON but did not parse
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short variant name, exposed in development error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "Unauthorized",
            AppError::BadRequest(_) => "BadRequest",
            AppError::MalformedBody(_) => "MalformedBody",
            AppError::Internal(_) => "Internal",
        }
    }
}

// == Server Failure ==
/// Details of a 500 response, carried as a response extension until the
/// server-error renderer decides how much of it the client sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerFailure {
    pub kind: &'static str,
    pub message: String,
}

impl ServerFailure {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl IntoResponse for ServerFailure {
    /// A 500 response with the generic body and this failure attached.
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ServerErrorResponse::generic()),
        )
            .into_response();
        response.extensions_mut().insert(self);
        response
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(UNAUTHORIZED_MESSAGE)),
            )
                .into_response(),
            // Plain text, not JSON
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            AppError::MalformedBody(_) | AppError::Internal(_) => {
                ServerFailure::new(self.kind(), self.to_string()).into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the address book server.
pub type Result<T> = std::result::Result<T, AppError>;
