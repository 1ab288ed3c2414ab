//! Record Module
//!
//! The student record stored in the roster, keyed by roll number.
//!
//! ## Enrollment Variants
//! A record is created in exactly one of two shapes:
//! - **Graded**: carries marks and the letter grade derived from them
//! - **Research**: carries a research area; grade is not applicable (`'N'`)
//!
//! Only `course` can change after creation, and only through the store.

mod display;
mod grade;

pub use display::Brief;
pub use grade::{Grade, Marks};

/// Roll number: the unique key of a record
pub type RollNo = i32;

/// How a student is enrolled
#[derive(Debug, Clone, PartialEq)]
pub enum Enrollment {
    /// Coursework student with marks and a derived grade
    Graded(Marks),

    /// Research student, no marks
    Research { area: String },
}

impl Enrollment {
    /// Graded enrollment; the grade is computed here, once
    pub fn graded(marks: f64) -> Self {
        Enrollment::Graded(Marks::new(marks))
    }

    /// Research enrollment
    pub fn research(area: impl Into<String>) -> Self {
        Enrollment::Research { area: area.into() }
    }

    /// Grade for this enrollment (`NotApplicable` for research)
    pub fn grade(&self) -> Grade {
        match self {
            Enrollment::Graded(marks) => marks.grade(),
            Enrollment::Research { .. } => Grade::NotApplicable,
        }
    }

    /// Marks, if graded
    pub fn marks(&self) -> Option<f64> {
        match self {
            Enrollment::Graded(marks) => Some(marks.value()),
            Enrollment::Research { .. } => None,
        }
    }

    /// Research area, if a research student
    pub fn research_area(&self) -> Option<&str> {
        match self {
            Enrollment::Graded(_) => None,
            Enrollment::Research { area } => Some(area),
        }
    }
}

/// One student's stored data
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    roll_no: RollNo,
    name: String,
    email: String,
    course: String,
    enrollment: Enrollment,
}

impl StudentRecord {
    /// Create a record with an explicit enrollment
    pub fn new(
        roll_no: RollNo,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        enrollment: Enrollment,
    ) -> Self {
        Self {
            roll_no,
            name: name.into(),
            email: email.into(),
            course: course.into(),
            enrollment,
        }
    }

    /// Create a graded record
    pub fn graded(
        roll_no: RollNo,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self::new(roll_no, name, email, course, Enrollment::graded(marks))
    }

    /// Create a research record
    pub fn research(
        roll_no: RollNo,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self::new(roll_no, name, email, course, Enrollment::research(area))
    }

    pub fn roll_no(&self) -> RollNo {
        self.roll_no
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn enrollment(&self) -> &Enrollment {
        &self.enrollment
    }

    /// Letter grade, `Grade::NotApplicable` for research students
    pub fn grade(&self) -> Grade {
        self.enrollment.grade()
    }

    /// Short display wrapper (identity and course only)
    pub fn brief(&self) -> Brief<'_> {
        Brief(self)
    }

    /// Replace the course. Only the store calls this.
    pub(crate) fn set_course(&mut self, course: String) {
        self.course = course;
    }
}
