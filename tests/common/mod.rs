#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the numdist binary.
#[macro_export]
macro_rules! numdist {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("numdist"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Creates a `.numdist.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".numdist.toml", content);
    }

    /// Creates a one-column data file holding `1..=n`.
    pub fn create_sequence(&self, relative_path: &str, n: u32) {
        let mut content = String::new();
        for i in 1..=n {
            let _ = writeln!(content, "{i}");
        }
        self.create_file(relative_path, &content);
    }
}

/// `1..=n`, one value per line, for piping into stdin.
pub fn sequence(n: u32) -> String {
    (1..=n).map(|i| format!("{i}\n")).collect()
}
