//! Error types for Roster
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::RollNo;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
///
/// Everything except `Io` is an expected, user-facing outcome: the session
/// reports it and keeps going.
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // Store Outcomes
    // -------------------------------------------------------------------------
    #[error("Roll number {0} already exists")]
    DuplicateKey(RollNo),

    #[error("Roll number {0} not found")]
    NotFound(RollNo),

    #[error("Store is empty")]
    EmptyStore,

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether the session can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RosterError::Io(_))
    }
}
