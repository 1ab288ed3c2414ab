//! Store Module
//!
//! In-memory collection of student records keyed by roll number.
//!
//! ## Responsibilities
//! - Enforce roll number uniqueness on create
//! - Point lookup, removal and course updates by roll number
//! - Unordered, restartable enumeration of every record
//!
//! ## Data Structure Choice
//! A plain `HashMap` owned by one `RecordStore` value:
//! - Access is single-threaded, so there is no lock
//! - Enumeration order is not part of the contract, so no ordered map

mod table;

pub use table::{RecordStore, Records};
