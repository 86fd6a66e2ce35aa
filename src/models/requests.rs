//! Request parsing helpers for the address book API
//!
//! Create bodies are parsed into [`crate::book::AddressCandidate`]; this module
//! covers the surrounding request details.

use axum::http::{header::CONTENT_TYPE, HeaderMap};

/// Parses the `:id` path segment of `DELETE /address/:id`.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer yields `None`, which matches no record.
pub fn parse_address_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Whether the request declares an `application/json` body.
///
/// Bodies of any other type, `+json` suffixes included, are ignored and
/// treated as empty.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
}
