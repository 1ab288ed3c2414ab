//! # Roster
//!
//! An interactive console roster of student records:
//! - Add, delete, update (course), search and list
//! - Graded and research students as distinct record variants
//! - One in-memory store, no persistence
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Terminal                                │
//! │                 (stdin / stdout)                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Session                                  │
//! │          (menu loop, prompts, status lines)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐
//!               │ RecordStore  │
//!               │  (HashMap)   │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod menu;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::{Enrollment, Grade, RollNo, StudentRecord};
pub use session::Session;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
