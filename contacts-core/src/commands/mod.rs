use std::fmt;

use crate::error::Result;
use crate::model::Model;

pub mod import_csv;

/// Outcome of a successful command, shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback_to_user
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback_to_user)
    }
}

pub trait Command {
    /// Run against `model`. On `Err` the model is left untouched.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult>;
}
