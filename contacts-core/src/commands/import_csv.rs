use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use crate::commands::{Command, CommandResult};
use crate::domain::Person;
use crate::error::{CommandError, Result};
use crate::model::Model;
use crate::policy::ImportPolicy;

pub const COMMAND_WORD: &str = "importcsv";
pub const MESSAGE_USAGE: &str =
    "importcsv: Adds persons from a CSV file to the address book. Parameters: PATH (to CSV file)";

/// Adds a batch of persons read from a CSV file, all or nothing.
#[derive(Clone, Debug)]
pub struct ImportCsvCommand {
    persons: Vec<Person>,
    policy: ImportPolicy,
}

impl ImportCsvCommand {
    pub fn new(persons: Vec<Person>) -> Self {
        Self::with_policy(persons, ImportPolicy::default())
    }

    pub fn with_policy(persons: Vec<Person>, policy: ImportPolicy) -> Self {
        Self { persons, policy }
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

    fn require_no_duplicates(&self) -> Result<()> {
        let mut seen: HashMap<&Person, usize> = HashMap::with_capacity(self.persons.len());
        for (i, person) in self.persons.iter().enumerate() {
            match seen.entry(person) {
                Entry::Occupied(first) => {
                    return Err(CommandError::BatchDuplicate {
                        first_row: self.policy.row_number(*first.get()),
                        second_row: self.policy.row_number(i),
                        name: person.name().to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }
        Ok(())
    }

    fn require_none_stored(&self, model: &dyn Model) -> Result<()> {
        if !model.has_persons(&self.persons) {
            return Ok(());
        }
        let Some((index, person)) = model
            .find_duplicate_index(&self.persons)
            .and_then(|i| self.persons.get(i).map(|p| (i, p)))
        else {
            unreachable!("model reported stored duplicates but found no duplicate index");
        };
        Err(CommandError::StoreDuplicate {
            row: self.policy.row_number(index),
            name: person.name().to_string(),
        })
    }
}

impl Command for ImportCsvCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        debug!(command = COMMAND_WORD, persons = self.len(), "import started");

        self.require_no_duplicates()?;
        debug!(command = COMMAND_WORD, "batch has no internal duplicates");

        self.require_none_stored(model)?;
        debug!(command = COMMAND_WORD, "batch does not overlap the address book");

        model.add_persons(&self.persons);
        let state = model.address_book().clone();
        model.commit(state);

        info!(
            command = COMMAND_WORD,
            added = self.len(),
            total = model.address_book().len(),
            "import committed"
        );
        Ok(CommandResult::new(format!("{} New person added.", self.len())))
    }
}
