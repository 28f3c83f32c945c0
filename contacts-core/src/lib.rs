#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod policy;

pub mod model {
    pub mod address_book;
    pub mod history;
    pub mod manager;

    pub use address_book::AddressBook;
    pub use history::History;
    pub use manager::ModelManager;

    use crate::domain::Person;

    /// Record store capabilities a command may use.
    pub trait Model {
        fn address_book(&self) -> &AddressBook;

        /// True when any of `persons` is already stored.
        fn has_persons(&self, persons: &[Person]) -> bool;

        /// Index into `persons` of the first one already stored.
        fn find_duplicate_index(&self, persons: &[Person]) -> Option<usize>;

        fn add_persons(&mut self, persons: &[Person]);

        /// Record `state` as the latest committed address book.
        fn commit(&mut self, state: AddressBook);
    }
}

pub mod commands;

// Re-exports: stable API surface
pub use commands::import_csv::ImportCsvCommand;
pub use commands::{Command, CommandResult};
pub use domain::Person;
pub use error::{CommandError, Result};
pub use model::{AddressBook, Model, ModelManager};
pub use policy::ImportPolicy;
