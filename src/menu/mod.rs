//! Menu Module
//!
//! The line-oriented text protocol between the user and the session.
//!
//! ## Exchange
//! ```text
//! session ──▶ menu block + "Enter choice: "
//! user    ──▶ "1".."6"
//! session ──▶ field prompts ("Enter Roll No: ", ...)
//! user    ──▶ one line per field
//! session ──▶ status line or record block
//! ```
//!
//! ### Choices
//! - 1: ADD
//! - 2: DELETE
//! - 3: UPDATE (course only)
//! - 4: SEARCH
//! - 5: VIEW ALL
//! - 6: EXIT

mod codec;
mod command;
mod response;

pub use codec::{read_field, read_number, write_menu, write_prompt, write_response};
pub use command::MenuChoice;
pub use response::{Response, Status};
