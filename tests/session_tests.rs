//! Session Tests
//!
//! Tests verify:
//! - Each menu action end to end through scripted input
//! - Early rejection of duplicate and unknown roll numbers
//! - Invalid choices and bad numeric input keep the loop alive
//! - End of input ends the session cleanly
//! - Undecodable input bytes do not end the session
//! - Output failures are propagated

use std::io::{self, Cursor, Write};

use roster::record::{Grade, StudentRecord};
use roster::{Config, RecordStore, RosterError, Session};

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a session over `input` and return the final store and transcript
fn run_script(input: &str) -> (RecordStore, String) {
    run_script_with(RecordStore::new(), Config::default(), input)
}

fn run_script_with(store: RecordStore, config: Config, input: &str) -> (RecordStore, String) {
    let mut session = Session::with_store(Cursor::new(input), Vec::new(), store, config);
    session.run().unwrap();

    let (store, output) = session.into_parts();
    (store, String::from_utf8(output).unwrap())
}

/// Writer whose every write fails, like a closed terminal
struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }
}

fn seeded_store() -> RecordStore {
    let mut store = RecordStore::new();
    store
        .create(StudentRecord::graded(101, "Asha", "a@x.com", "CS", 92.0))
        .unwrap();
    store
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_graded_student() {
    let (store, output) = run_script("1\n101\nAsha\na@x.com\nCS\nno\n92\n6\n");

    assert!(output.contains("Enter Roll No: "));
    assert!(output.contains("Enter Marks: "));
    assert!(output.contains("Student added successfully!\n"));

    let record = store.find(101).unwrap();
    assert_eq!(record.name(), "Asha");
    assert_eq!(record.grade(), Grade::A);
}

#[test]
fn test_add_research_student_case_insensitive() {
    let (store, output) = run_script("1\n7\nRavi\nr@x.com\nPhD\nYES\nCompilers\n6\n");

    assert!(output.contains("Enter Research Area: "));
    assert!(!output.contains("Enter Marks: "));

    let record = store.find(7).unwrap();
    assert_eq!(record.grade(), Grade::NotApplicable);
    assert_eq!(record.enrollment().research_area(), Some("Compilers"));
}

#[test]
fn test_add_duplicate_rejected_before_other_prompts() {
    let (store, output) = run_script_with(seeded_store(), Config::default(), "1\n101\n6\n");

    assert!(output.contains("Roll number already exists!\n"));
    assert!(!output.contains("Enter Name: "));
    assert_eq!(store.find(101).unwrap().name(), "Asha");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_with_bad_marks_does_not_insert() {
    let (store, output) = run_script("1\n5\nLee\nl@x.com\nMath\nno\nninety\n6\n");

    assert!(output.contains("Invalid input!\n"));
    assert!(store.is_empty());
}

// =============================================================================
// Delete / Update / Search Tests
// =============================================================================

#[test]
fn test_delete() {
    let (store, output) = run_script_with(seeded_store(), Config::default(), "2\n101\n2\n101\n6\n");

    assert!(output.contains("Student removed!\n"));
    assert!(output.contains("Student not found!\n"));
    assert!(store.is_empty());
}

#[test]
fn test_update_course() {
    let (store, output) = run_script_with(seeded_store(), Config::default(), "3\n101\nEE\n6\n");

    assert!(output.contains("Enter New Course: "));
    assert!(output.contains("Record updated!\n"));

    let record = store.find(101).unwrap();
    assert_eq!(record.course(), "EE");
    assert_eq!(record.grade(), Grade::A);
}

#[test]
fn test_update_missing_does_not_ask_for_course() {
    let (_, output) = run_script("3\n55\n6\n");

    assert!(output.contains("Student not found!\n"));
    assert!(!output.contains("Enter New Course: "));
}

#[test]
fn test_search() {
    let (_, output) = run_script_with(seeded_store(), Config::default(), "4\n101\n4\n9\n6\n");

    assert!(output.contains("Roll No: 101\n"));
    assert!(output.contains("Marks  : 92.0 | Grade: A\n"));
    assert!(output.contains("Student not found!\n"));
}

// =============================================================================
// View All Tests
// =============================================================================

#[test]
fn test_view_all_empty() {
    let (_, output) = run_script("5\n6\n");
    assert!(output.contains("No records found.\n"));
}

#[test]
fn test_view_all_lists_every_record() {
    let mut store = seeded_store();
    store
        .create(StudentRecord::research(102, "Ravi", "r@x.com", "PhD", "Compilers"))
        .unwrap();

    let (_, output) = run_script_with(store, Config::default(), "5\n6\n");

    assert_eq!(output.matches("Student Info:").count(), 2);
    assert!(output.contains("Research Area: Compilers\n"));
    assert!(output.contains("Grade: A"));
}

#[test]
fn test_view_all_brief() {
    let config = Config::builder().brief_listing(true).build();

    let (_, output) = run_script_with(seeded_store(), config, "5\n6\n");

    assert!(output.contains("Course : CS\n"));
    assert!(!output.contains("Marks"));
}

// =============================================================================
// Loop Control Tests
// =============================================================================

#[test]
fn test_exit_message() {
    let (_, output) = run_script("6\n");

    assert!(output.starts_with("\n===== Student Management Menu =====\n"));
    assert!(output.ends_with("Enter choice: Exiting program.\n"));
}

#[test]
fn test_exit_stops_reading() {
    let (store, output) = run_script("6\n1\n101\nAsha\na@x.com\nCS\nno\n92\n");

    assert!(store.is_empty());
    assert_eq!(output.matches("Enter choice: ").count(), 1);
}

#[test]
fn test_invalid_choice_keeps_looping() {
    let (_, output) = run_script("9\nabc\n6\n");

    assert_eq!(output.matches("Invalid choice!\n").count(), 2);
    assert!(output.contains("Exiting program.\n"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (store, output) = run_script("1\n101\nAsha\n");

    assert!(store.is_empty());
    assert!(output.ends_with("Enter Email: "));
    assert!(!output.contains("Exiting program."));
}

#[test]
fn test_custom_menu_title() {
    let config = Config::builder().menu_title("Roster").build();

    let (_, output) = run_script_with(RecordStore::new(), config, "6\n");

    assert!(output.contains("===== Roster =====\n"));
}

#[test]
fn test_new_session_uses_config_capacity() {
    let config = Config::builder().initial_capacity(8).build();
    let session = Session::new(Cursor::new(""), Vec::new(), config);

    assert!(session.store().is_empty());
    assert_eq!(session.config().initial_capacity, 8);
}

#[test]
fn test_non_numeric_roll_no_keeps_looping() {
    let (store, output) = run_script_with(
        seeded_store(),
        Config::default(),
        "2\nabc\n3\nx1\n4\n\n6\n",
    );

    assert_eq!(output.matches("Invalid input!\n").count(), 3);
    assert!(!output.contains("Enter New Course: "));
    assert!(output.ends_with("Exiting program.\n"));

    let record = store.find(101).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(record.course(), "CS");
}

#[test]
fn test_invalid_utf8_input_keeps_session_alive() {
    let script = b"1\n101\nAsh\xffa\na@x.com\nCS\nno\n92\n5\n6\n";
    let mut session = Session::new(Cursor::new(&script[..]), Vec::new(), Config::default());

    session.run().unwrap();

    let (store, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Student added successfully!\n"));
    assert!(output.contains("Name   : Ash\u{FFFD}a\n"));
    assert!(output.ends_with("Exiting program.\n"));
    assert_eq!(store.find(101).unwrap().name(), "Ash\u{FFFD}a");
}

#[test]
fn test_output_failure_is_propagated() {
    let mut session = Session::new(Cursor::new("5\n6\n"), ClosedOutput, Config::default());

    let result = session.run();

    assert!(matches!(
        result,
        Err(RosterError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe
    ));
}
