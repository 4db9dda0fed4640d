// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// Test fixture helper for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create an input file with given content
    pub fn create_input_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Run the library pipeline over in-memory text and return what it printed
pub fn pick_text(input: &str, rows: &str, columns: &str) -> String {
    let picker = pick::Picker::from_specs(rows, columns, pick::PickerConfig::default())
        .expect("Specs should parse");
    let lines = input.lines().map(|l| Ok::<_, io::Error>(l.to_string()));
    let mut out = Vec::new();
    picker.write_to(lines, None, &mut out).expect("Pick should succeed");
    String::from_utf8(out).expect("Output should be UTF-8")
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\nActual output:\n{}",
            context, expected_lines.len(), actual_lines.len(), actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {:?}\nActual:   {:?}",
                context, i + 1, expected_line, actual_line
            );
        }
    }
}
