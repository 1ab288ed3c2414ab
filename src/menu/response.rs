//! Response definitions
//!
//! Status lines printed after each menu action.

use crate::error::RosterError;

/// Outcome of a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Added,
    Removed,
    Updated,
    NotFound,
    DuplicateKey,
    NoRecords,
    InvalidChoice,
    InvalidInput,
    Exiting,
}

/// A status line to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
}

impl Response {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    /// Map an error onto the status the user sees
    ///
    /// `Io` never reaches the user: the session checks
    /// `RosterError::is_recoverable` first and propagates it instead.
    pub fn from_error(error: &RosterError) -> Self {
        let status = match error {
            RosterError::DuplicateKey(_) => Status::DuplicateKey,
            RosterError::NotFound(_) => Status::NotFound,
            RosterError::EmptyStore => Status::NoRecords,
            RosterError::InvalidInput(_) | RosterError::Io(_) => Status::InvalidInput,
        };
        Self::new(status)
    }

    /// Text printed for this response
    pub fn message(&self) -> &'static str {
        match self.status {
            Status::Added => "Student added successfully!",
            Status::Removed => "Student removed!",
            Status::Updated => "Record updated!",
            Status::NotFound => "Student not found!",
            Status::DuplicateKey => "Roll number already exists!",
            Status::NoRecords => "No records found.",
            Status::InvalidChoice => "Invalid choice!",
            Status::InvalidInput => "Invalid input!",
            Status::Exiting => "Exiting program.",
        }
    }
}

impl From<Status> for Response {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}
