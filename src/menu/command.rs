//! Menu choices
//!
//! Represents the numbered options of the main menu.

use std::fmt;

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 1,
    Delete = 2,
    Update = 3,
    Search = 4,
    ViewAll = 5,
    Exit = 6,
}

impl MenuChoice {
    /// Every choice, in menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Update,
        MenuChoice::Search,
        MenuChoice::ViewAll,
        MenuChoice::Exit,
    ];

    /// Parse a line typed at the `Enter choice:` prompt
    ///
    /// Returns `None` for anything that is not one of the six numbers.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Delete),
            3 => Some(MenuChoice::Update),
            4 => Some(MenuChoice::Search),
            5 => Some(MenuChoice::ViewAll),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::Update => "Update Student",
            MenuChoice::Search => "Search Student",
            MenuChoice::ViewAll => "View All Students",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", *self as u8, self.label())
    }
}
