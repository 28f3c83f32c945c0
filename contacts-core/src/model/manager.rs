use tracing::trace;

use crate::domain::Person;
use crate::model::Model;
use crate::model::address_book::AddressBook;
use crate::model::history::History;

/// In-memory `Model`: the live address book plus its commit log.
#[derive(Clone, Debug)]
pub struct ModelManager {
    address_book: AddressBook,
    history: History,
}

impl ModelManager {
    pub fn new(address_book: AddressBook) -> Self {
        let history = History::starting_at(address_book.clone());
        Self {
            address_book,
            history,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn has_persons(&self, persons: &[Person]) -> bool {
        self.address_book.has_any(persons)
    }

    fn find_duplicate_index(&self, persons: &[Person]) -> Option<usize> {
        self.address_book.find_first_duplicate_index(persons)
    }

    fn add_persons(&mut self, persons: &[Person]) {
        self.address_book.add_all(persons);
    }

    fn commit(&mut self, state: AddressBook) {
        trace!(persons = state.len(), "commit address book");
        self.history.record(state);
    }
}
