//! Request and Response models for the address book API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! reading HTTP request input and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{is_json_content_type, parse_address_id};
pub use responses::{CreatedResponse, ErrorResponse, ServerErrorResponse};
