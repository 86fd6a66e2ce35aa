//! Address Book - A small in-memory address book served over HTTP
//!
//! Lists, creates, and deletes postal address records. Writes require a
//! shared bearer token.

pub mod api;
pub mod book;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use book::{AddressBook, AddressRecord};
pub use config::{Config, RunMode};
