//! Subprocess-backed [`ScriptRunner`] implementation.

use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ScriptRunner;

/// Runs commands through the system shell environment.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<i32, AppError> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        // Inherits the caller's standard streams and blocks until exit.
        let status = command.status().map_err(|e| AppError::CommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            details: e.to_string(),
        })?;

        Ok(status.code().unwrap_or(-1))
    }

    fn capture(&self, program: &str, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            AppError::CommandFailed {
                command: format!("{} {}", program, args.join(" ")),
                details: e.to_string(),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CommandFailed {
                command: format!("{} {}", program, args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
