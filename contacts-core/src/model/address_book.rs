use serde::{Deserialize, Serialize};

use crate::domain::Person;

/// Stored persons in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p == person)
    }

    pub fn has_any(&self, batch: &[Person]) -> bool {
        batch.iter().any(|p| self.contains(p))
    }

    /// Position within `batch` (not within the book) of its first stored person.
    pub fn find_first_duplicate_index(&self, batch: &[Person]) -> Option<usize> {
        batch.iter().position(|p| self.contains(p))
    }

    /// Appends `batch` as is. Callers check for duplicates first.
    pub fn add_all(&mut self, batch: &[Person]) {
        debug_assert!(
            !self.has_any(batch),
            "add_all called with persons already in the address book"
        );
        self.persons.extend_from_slice(batch);
    }
}

impl FromIterator<Person> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self {
            persons: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person::new(
            name.into(),
            "91234567".into(),
            format!("{}@example.com", name.to_lowercase()).as_str().into(),
            "Blk 30 Geylang Street 29".into(),
        )
    }

    #[test]
    fn first_duplicate_follows_batch_order() {
        let book: AddressBook = ["Carl", "Bob"].into_iter().map(person).collect();
        let batch = [person("Alice"), person("Bob"), person("Carl")];
        assert!(book.has_any(&batch));
        assert_eq!(book.find_first_duplicate_index(&batch), Some(1));
    }

    #[test]
    fn no_overlap_reports_nothing() {
        let book: AddressBook = std::iter::once(person("Carl")).collect();
        let batch = [person("Alice"), person("Bob")];
        assert!(!book.has_any(&batch));
        assert_eq!(book.find_first_duplicate_index(&batch), None);
        assert!(!AddressBook::new().has_any(&batch));
    }

    #[test]
    fn add_all_keeps_insertion_order() {
        let mut book: AddressBook = std::iter::once(person("Carl")).collect();
        book.add_all(&[person("Alice"), person("Bob")]);
        let names: Vec<_> = book.persons().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Carl", "Alice", "Bob"]);
        assert_eq!(book.len(), 3);
    }
}
