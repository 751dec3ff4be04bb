use std::path::Path;

use crate::domain::AppError;

/// Abstraction over external command execution.
///
/// The generation pipeline itself never shells out; only the `deploy`
/// command (running the generated script) and the CI status probes do, and
/// both go through this port so tests can substitute a mock.
pub trait ScriptRunner {
    /// Run a command with inherited standard streams, waiting for
    /// completion. Returns the process exit code.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<i32, AppError>;

    /// Run a command and capture its trimmed stdout. Fails if the command
    /// cannot be spawned or exits non-zero.
    fn capture(&self, program: &str, args: &[&str]) -> Result<String, AppError>;
}
