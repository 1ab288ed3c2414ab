//! Grading
//!
//! Letter grades and the marks they are derived from.

use std::fmt;

/// Letter grade of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,

    /// Research students are not graded
    NotApplicable,
}

impl Grade {
    /// Grade for a mark. Total: NaN and anything below 60 is a `D`.
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Grade::A
        } else if marks >= 75.0 {
            Grade::B
        } else if marks >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    /// Single-character form, `'N'` for not applicable
    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::NotApplicable => 'N',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Marks together with the grade computed from them
///
/// Fields are private so the grade can never disagree with the marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marks {
    value: f64,
    grade: Grade,
}

impl Marks {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            grade: Grade::from_marks(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
