//! Address Book Module
//!
//! In-memory address records, create-time validation, and the record store.

mod record;
mod store;
mod validation;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use record::{AddressRecord, NewAddress};
pub use store::AddressBook;
pub use validation::{AddressCandidate, ValidationError, REQUIRED_FIELDS};

// == Public Constants ==
/// Number of characters in a state code
pub const STATE_CODE_LENGTH: usize = 2;

/// Number of digits in a zipcode
pub const ZIP_LENGTH: usize = 5;
