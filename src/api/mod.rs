//! API Module
//!
//! HTTP handlers and routing for the address book REST API.
//!
//! # Endpoints
//! - `GET /address` - List every record
//! - `POST /address` - Create a record (bearer token)
//! - `DELETE /address/:id` - Delete a record (bearer token)

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod routes;

pub use auth::{authorize, BearerAuth};
pub use handlers::*;
pub use routes::create_router;
