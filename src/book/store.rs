//! Address Book Store Module
//!
//! Insertion-ordered record list with a monotonic id counter.

use crate::book::{AddressRecord, NewAddress};

// == Address Book ==
/// In-memory record set owned by the service.
#[derive(Debug, Clone)]
pub struct AddressBook {
    /// Records in insertion order
    records: Vec<AddressRecord>,
    /// Id handed to the next created record
    next_id: u64,
}

impl AddressBook {
    // == Constructor ==
    /// Creates a book holding only the seed record, with ids starting at 1.
    pub fn new() -> Self {
        Self::with_records(vec![AddressRecord::seed()])
    }

    /// Creates a book from existing records.
    ///
    /// The counter starts after the highest id present, or at 1 when empty.
    pub fn with_records(records: Vec<AddressRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id + 1).max().unwrap_or(1).max(1);
        Self { records, next_id }
    }

    // == List ==
    /// Returns every record in insertion order.
    pub fn list(&self) -> &[AddressRecord] {
        &self.records
    }

    // == Create ==
    /// Assigns the next id to `address` and appends it.
    ///
    /// Returns the new id.
    pub fn create(&mut self, address: NewAddress) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(AddressRecord::from_new(id, address));
        id
    }

    // == Delete ==
    /// Removes the record with `id`, if any.
    ///
    /// Returns whether a record was removed. The id counter is untouched.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if the book holds no records.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next created record will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn address(first_name: &str) -> NewAddress {
        NewAddress {
            first_name: first_name.to_string(),
            last_name: "Lee".to_string(),
            address1: "1 Oak Ave".to_string(),
            address2: None,
            city: "Reno".to_string(),
            state: "NV".to_string(),
            zip: "89501".to_string(),
        }
    }

    #[test]
    fn test_book_new_has_seed() {
        let book = AddressBook::new();
        assert_eq!(book.len(), 1);
        assert_eq!(book.list()[0].id, 0);
        assert_eq!(book.next_id(), 1);
    }

    #[test]
    fn test_book_create_appends() {
        let mut book = AddressBook::new();

        let id = book.create(address("Ana"));

        assert_eq!(id, 1);
        assert_eq!(book.len(), 2);
        let last = book.list().last().unwrap();
        assert_eq!(last.id, 1);
        assert_eq!(last.first_name, "Ana");
        assert!(last.address2.is_none());
    }

    #[test]
    fn test_book_delete() {
        let mut book = AddressBook::new();
        let id = book.create(address("Ana"));

        assert!(book.delete(id));
        assert_eq!(book.len(), 1);
        assert!(book.list().iter().all(|r| r.id != id));
    }

    #[test]
    fn test_book_delete_is_idempotent() {
        let mut book = AddressBook::new();
        let id = book.create(address("Ana"));

        assert!(book.delete(id));
        assert!(!book.delete(id));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_book_delete_seed() {
        let mut book = AddressBook::new();
        assert!(book.delete(0));
        assert!(book.is_empty());
    }

    #[test]
    fn test_book_ids_never_reused() {
        let mut book = AddressBook::new();
        let first = book.create(address("Ana"));
        book.delete(first);

        let second = book.create(address("Bo"));

        assert_eq!(second, first + 1);
        assert_eq!(book.next_id(), second + 1);
    }

    #[test]
    fn test_book_preserves_insertion_order() {
        let mut book = AddressBook::new();
        book.create(address("Ana"));
        book.create(address("Bo"));
        book.create(address("Cy"));
        book.delete(2);

        let names: Vec<&str> = book.list().iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Michael", "Ana", "Cy"]);
    }

    #[test]
    fn test_book_with_records_counter() {
        assert_eq!(AddressBook::with_records(Vec::new()).next_id(), 1);

        let mut seed = AddressRecord::seed();
        seed.id = 41;
        assert_eq!(AddressBook::with_records(vec![seed]).next_id(), 42);
    }
}
