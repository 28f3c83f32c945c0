use crate::model::address_book::AddressBook;

/// Append-only log of committed address book states, oldest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    states: Vec<AddressBook>,
}

impl History {
    /// Start a log whose first entry is `initial`.
    pub fn starting_at(initial: AddressBook) -> Self {
        Self {
            states: vec![initial],
        }
    }

    pub fn record(&mut self, state: AddressBook) {
        self.states.push(state);
    }

    pub fn latest(&self) -> Option<&AddressBook> {
        self.states.last()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddressBook> {
        self.states.iter()
    }
}
