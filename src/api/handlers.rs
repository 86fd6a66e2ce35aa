//! API Handlers
//!
//! HTTP request handlers for each address book endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use super::auth::BearerAuth;
use crate::book::{AddressBook, AddressCandidate, AddressRecord};
use crate::config::Config;
use crate::error::Result;
use crate::models::{is_json_content_type, parse_address_id, CreatedResponse};

/// Application state shared across all handlers.
///
/// The book sits behind one lock so id assignment and append happen together.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe address book
    pub book: Arc<RwLock<AddressBook>>,
    /// Configuration fixed at startup
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given book and configuration.
    pub fn new(book: AddressBook, config: Config) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration, starting from the seed record.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AddressBook::new(), config.clone())
    }
}

/// Handler for GET /address
///
/// Returns every record in insertion order. No authorization.
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<AddressRecord>> {
    let book = state.book.read().await;
    Json(book.list().to_vec())
}

/// Handler for POST /address
///
/// Validates the body and appends a new record. Responds 201 with a
/// `Location` header and `{"id": ...}`.
pub async fn create_handler(
    State(state): State<AppState>,
    _auth: BearerAuth,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let candidate = if is_json_content_type(&headers) {
        AddressCandidate::from_json_slice(&body)?
    } else {
        AddressCandidate::default()
    };

    let address = candidate.validate().map_err(|err| {
        debug!(error = %err, "Rejected address");
        err
    })?;

    let id = {
        let mut book = state.book.write().await;
        book.create(address)
    };
    info!(id, "Created address");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, state.config.address_url(id))],
        Json(CreatedResponse::new(id)),
    ))
}

/// Handler for DELETE /address/:id
///
/// Removes the record if present. Always 204, found or not.
pub async fn delete_handler(
    State(state): State<AppState>,
    _auth: BearerAuth,
    Path(raw_id): Path<String>,
) -> StatusCode {
    match parse_address_id(&raw_id) {
        Some(id) => {
            let removed = state.book.write().await.delete(id);
            if removed {
                info!(id, "Deleted address");
            } else {
                debug!(id, "Delete matched no address");
            }
        }
        None => debug!(raw_id = %raw_id, "Delete with non-numeric id"),
    }

    StatusCode::NO_CONTENT
}
