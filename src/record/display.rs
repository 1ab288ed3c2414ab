//! Record rendering
//!
//! Text blocks echoed to the terminal for search and view-all.
//!
//! ## Full block
//! ```text
//!
//! Student Info:
//! Roll No: 101
//! Name   : Asha
//! Email  : a@x.com
//! Course : CS
//! Marks  : 92.0 | Grade: A
//! ```
//! Research students print `Research Area: ...` in place of the marks line.
//! The brief block stops after `Course`.

use std::fmt;

use super::{Enrollment, StudentRecord};

impl StudentRecord {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Student Info:")?;
        writeln!(f, "Roll No: {}", self.roll_no)?;
        writeln!(f, "Name   : {}", self.name)?;
        writeln!(f, "Email  : {}", self.email)?;
        writeln!(f, "Course : {}", self.course)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;

        match &self.enrollment {
            Enrollment::Research { area } => writeln!(f, "Research Area: {}", area),
            // Debug keeps the trailing `.0` on whole marks
            Enrollment::Graded(marks) => writeln!(
                f,
                "Marks  : {:?} | Grade: {}",
                marks.value(),
                marks.grade()
            ),
        }
    }
}

/// Short form of a record: header and identity fields only
pub struct Brief<'a>(pub(super) &'a StudentRecord);

impl fmt::Display for Brief<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_header(f)
    }
}
