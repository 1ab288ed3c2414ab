//! Session Module
//!
//! The menu driver: one store bound to one input and one output.
//!
//! ## Responsibilities
//! - Print the menu and read a choice, until Exit or end of input
//! - Collect the fields each action needs
//! - Call the store and report the outcome as a status line
//!
//! Store outcomes (duplicate, not found, empty) and bad numeric input are
//! reported and the loop carries on. Only I/O failures end a session with
//! an error.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::menu::{
    read_field, read_number, write_menu, write_prompt, write_response, MenuChoice, Response,
    Status,
};
use crate::record::{Enrollment, RollNo, StudentRecord};
use crate::store::RecordStore;

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Exit chosen or input closed
    Stop,
}

/// An interactive session over a record store
pub struct Session<R, W> {
    /// Line source (stdin in the binary, a cursor in tests)
    reader: R,

    /// Prompt and result sink
    writer: W,

    /// The records this session manages
    store: RecordStore,

    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty store sized from the config
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        let store = RecordStore::with_capacity(config.initial_capacity);
        Self::with_store(reader, writer, store, config)
    }

    /// Create a session over an existing store
    pub fn with_store(reader: R, writer: W, store: RecordStore, config: Config) -> Self {
        Self {
            reader,
            writer,
            store,
            config,
        }
    }

    /// Run the menu loop (blocking until Exit or end of input)
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Session started");

        loop {
            write_menu(&mut self.writer, &self.config.menu_title)?;

            let Some(line) = read_field(&mut self.reader)? else {
                tracing::debug!("Input closed at menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::warn!(input = %line, "Invalid menu choice");
                self.respond(Status::InvalidChoice)?;
                continue;
            };

            tracing::trace!(?choice, "Menu choice");

            match self.execute(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    tracing::debug!(records = self.store.len(), "Session ended");
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(?choice, "{}", e);
                    self.send_response(&Response::from_error(&e))?;
                }
                Err(e) => {
                    tracing::warn!("Session aborted: {}", e);
                    return Err(e);
                }
            }
        }
    }

    /// Route a choice to its action
    fn execute(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Update => self.update(),
            MenuChoice::Search => self.search(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::Exit => {
                self.respond(Status::Exiting)?;
                Ok(Flow::Stop)
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add(&mut self) -> Result<Flow> {
        let Some(roll_no) = self.ask_number::<RollNo>("Enter Roll No: ")? else {
            return Ok(Flow::Stop);
        };

        // Reject before asking for the remaining fields
        if self.store.contains(roll_no) {
            return Err(RosterError::DuplicateKey(roll_no));
        }

        let Some(name) = self.ask("Enter Name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(email) = self.ask("Enter Email: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(course) = self.ask("Enter Course: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(answer) = self.ask("Is this a research student? (yes/no): ")? else {
            return Ok(Flow::Stop);
        };

        let enrollment = if answer.eq_ignore_ascii_case("yes") {
            let Some(area) = self.ask("Enter Research Area: ")? else {
                return Ok(Flow::Stop);
            };
            Enrollment::research(area)
        } else {
            let Some(marks) = self.ask_number::<f64>("Enter Marks: ")? else {
                return Ok(Flow::Stop);
            };
            Enrollment::graded(marks)
        };

        self.store
            .create(StudentRecord::new(roll_no, name, email, course, enrollment))?;
        self.respond(Status::Added)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(roll_no) = self.ask_number::<RollNo>("Enter Roll No to delete: ")? else {
            return Ok(Flow::Stop);
        };

        self.store.delete(roll_no)?;
        self.respond(Status::Removed)?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(roll_no) = self.ask_number::<RollNo>("Enter Roll No to update: ")? else {
            return Ok(Flow::Stop);
        };

        if !self.store.contains(roll_no) {
            return Err(RosterError::NotFound(roll_no));
        }

        let Some(course) = self.ask("Enter New Course: ")? else {
            return Ok(Flow::Stop);
        };

        self.store.update_course(roll_no, course)?;
        self.respond(Status::Updated)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(roll_no) = self.ask_number::<RollNo>("Enter Roll No to search: ")? else {
            return Ok(Flow::Stop);
        };

        let record = self
            .store
            .find(roll_no)
            .ok_or(RosterError::NotFound(roll_no))?;

        write!(self.writer, "{}", record)?;
        self.writer.flush()?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            return Err(RosterError::EmptyStore);
        }

        for record in self.store.list_all() {
            if self.config.brief_listing {
                write!(self.writer, "{}", record.brief())?;
            } else {
                write!(self.writer, "{}", record)?;
            }
        }
        self.writer.flush()?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    /// Prompt for a text field; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write_prompt(&mut self.writer, prompt)?;
        read_field(&mut self.reader)
    }

    /// Prompt for a numeric field; `None` at end of input
    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        write_prompt(&mut self.writer, prompt)?;
        read_number(&mut self.reader)
    }

    fn respond(&mut self, status: Status) -> Result<()> {
        self.send_response(&status.into())
    }

    fn send_response(&mut self, response: &Response) -> Result<()> {
        write_response(&mut self.writer, response)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store this session manages
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear the session down into its store and output
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.writer)
    }
}
