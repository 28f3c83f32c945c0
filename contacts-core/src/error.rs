use thiserror::Error;

/// Reasons a command refuses to run. The `Display` text is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Rows {first_row} and {second_row} ({name}) are duplicates")]
    BatchDuplicate {
        first_row: usize,
        second_row: usize,
        name: String,
    },

    #[error("Row {row} ({name}) already exists in the address book")]
    StoreDuplicate { row: usize, name: String },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, CommandError>;
