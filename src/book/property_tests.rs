//! Property-Based Tests for the Address Book Module
//!
//! Uses proptest to check store and validation invariants over random inputs.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashSet;

use crate::book::{AddressBook, AddressCandidate, NewAddress, ValidationError};

// == Strategies ==
/// Generates non-empty printable field values
fn field_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .#]{1,32}".prop_map(|s| s)
}

fn state_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}".prop_map(|s| s)
}

fn zip_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5}".prop_map(|s| s)
}

fn new_address_strategy() -> impl Strategy<Value = NewAddress> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        proptest::option::of(field_strategy()),
        field_strategy(),
        state_strategy(),
        zip_strategy(),
    )
        .prop_map(
            |(first_name, last_name, address1, address2, city, state, zip)| NewAddress {
                first_name,
                last_name,
                address1,
                address2,
                city,
                state,
                zip,
            },
        )
}

/// A sequence of store operations
#[derive(Debug, Clone)]
enum BookOp {
    Create(NewAddress),
    Delete(u64),
}

fn book_op_strategy() -> impl Strategy<Value = BookOp> {
    prop_oneof![
        new_address_strategy().prop_map(BookOp::Create),
        (0u64..40).prop_map(BookOp::Delete),
    ]
}

fn fields_for(address: &NewAddress) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("firstName".into(), json!(address.first_name));
    fields.insert("lastName".into(), json!(address.last_name));
    fields.insert("address1".into(), json!(address.address1));
    if let Some(address2) = &address.address2 {
        fields.insert("address2".into(), json!(address2));
    }
    fields.insert("city".into(), json!(address.city));
    fields.insert("state".into(), json!(address.state));
    fields.insert("zip".into(), json!(address.zip));
    fields
}

fn candidate_for(address: &NewAddress) -> AddressCandidate {
    AddressCandidate::new(fields_for(address))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Ids handed out by create strictly increase and are never reused, no
    // matter how creates and deletes interleave.
    #[test]
    fn prop_ids_strictly_increase(ops in prop::collection::vec(book_op_strategy(), 1..60)) {
        let mut book = AddressBook::new();
        let mut issued: HashSet<u64> = HashSet::from([0]);
        let mut last_id = 0u64;

        for op in ops {
            match op {
                BookOp::Create(address) => {
                    let id = book.create(address);
                    prop_assert!(id > last_id, "id {} not above {}", id, last_id);
                    prop_assert!(issued.insert(id), "id {} reused", id);
                    last_id = id;
                }
                BookOp::Delete(id) => {
                    book.delete(id);
                }
            }

            let live: HashSet<u64> = book.list().iter().map(|r| r.id).collect();
            prop_assert_eq!(live.len(), book.len(), "Duplicate live ids");
        }
    }

    // Deleting the same id twice leaves the book exactly as the first delete did.
    #[test]
    fn prop_delete_idempotent(
        addresses in prop::collection::vec(new_address_strategy(), 0..10),
        id in 0u64..12
    ) {
        let mut book = AddressBook::new();
        for address in addresses {
            book.create(address);
        }

        book.delete(id);
        let after_first = book.list().to_vec();
        let next_id = book.next_id();

        prop_assert!(!book.delete(id), "Second delete should find nothing");
        prop_assert_eq!(book.list(), after_first.as_slice());
        prop_assert_eq!(book.next_id(), next_id, "Delete must not move the counter");
    }

    // A valid candidate survives validation and storage with every field intact.
    #[test]
    fn prop_roundtrip_valid_candidate(address in new_address_strategy()) {
        let validated = candidate_for(&address).validate();
        prop_assert_eq!(validated.as_ref(), Ok(&address));

        let mut book = AddressBook::new();
        let id = book.create(address.clone());
        let stored = book.list().iter().find(|r| r.id == id).cloned();

        prop_assert!(stored.is_some(), "Created record missing from list");
        let stored = stored.unwrap();
        prop_assert_eq!(stored.first_name, address.first_name);
        prop_assert_eq!(stored.address2, address.address2);
        prop_assert_eq!(stored.zip, address.zip);
    }

    // Any state code that is not exactly two characters is rejected.
    #[test]
    fn prop_state_length_enforced(
        address in new_address_strategy(),
        state in "[A-Z]{1}|[A-Z]{3,6}"
    ) {
        let mut fields = fields_for(&address);
        fields.insert("state".into(), Value::String(state));
        prop_assert_eq!(AddressCandidate::new(fields).validate(), Err(ValidationError::StateLength));
    }

    // Any zip that is not exactly five ASCII digits is rejected.
    #[test]
    fn prop_zip_format_enforced(
        address in new_address_strategy(),
        zip in "[0-9]{1,4}|[0-9]{6,9}|[A-Za-z]{5}|[0-9]{4}[a-z]"
    ) {
        let mut fields = fields_for(&address);
        fields.insert("zip".into(), Value::String(zip));
        prop_assert_eq!(AddressCandidate::new(fields).validate(), Err(ValidationError::ZipFormat));
    }
}
