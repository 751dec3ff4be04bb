//! Shared testing utilities for shipgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `shipgen` binary inside the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("shipgen").expect("Failed to locate shipgen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a configuration file into the working directory and return its
    /// path relative to it.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test config");
        PathBuf::from(name)
    }

    /// Path to the default template directory inside the working directory.
    pub fn template_dir(&self) -> PathBuf {
        self.work_dir.join("templates")
    }

    /// Path to the default output directory inside the working directory.
    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("generated")
    }

    /// Read a generated artifact.
    pub fn read_artifact(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name)).expect("Failed to read artifact")
    }
}
