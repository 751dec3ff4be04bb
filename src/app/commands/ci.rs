//! CI commands - environment status and strict configuration validation.

use std::env;
use std::path::Path;

use crate::app::console;
use crate::domain::{AppError, DeployConfig, validate};
use crate::ports::ScriptRunner;

/// Tools the deploy script relies on at runtime.
const PROBED_TOOLS: [&str; 4] = ["node", "npm", "docker", "git"];

/// Environment variables that indicate a CI environment.
const CI_MARKERS: [&str; 4] = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "JENKINS_URL"];

/// Execute the ci-status command.
pub fn status(runner: &impl ScriptRunner) -> Result<(), AppError> {
    console::info("CI/CD Environment Status");
    console::info("========================");

    let in_ci = CI_MARKERS.iter().any(|key| env::var_os(key).is_some());
    console::info(format!("CI Environment: {}", if in_ci { "Detected" } else { "Not Detected" }));

    console::info("Environment Variables:");
    let mut vars: Vec<(String, String)> = env::vars()
        .filter(|(key, _)| {
            key.starts_with("GITHUB_")
                || key.starts_with("CI")
                || key.starts_with("NODE_")
                || key == "HOME"
                || key == "PATH"
        })
        .collect();
    vars.sort();
    for (key, value) in vars {
        console::info(format!("  {}: {}", key, value));
    }

    let cwd = env::current_dir()?;
    console::info(format!("Working Directory: {}", cwd.display()));

    console::info("Available Tools:");
    for tool in PROBED_TOOLS {
        match runner.capture(tool, &["--version"]) {
            Ok(version) => console::info(format!("  {}: {}", tool, version)),
            Err(_) => console::warn(format!("  {}: Not available", tool)),
        }
    }

    Ok(())
}

/// Execute the ci-validate command.
///
/// Unlike `generate`, a missing or unparseable configuration file is a hard
/// failure here: a CI pipeline silently falling back to defaults would mask
/// a broken deployment.
pub fn validate_config(config_path: &Path) -> Result<(), AppError> {
    console::info(format!("Validating configuration for CI/CD: {}", config_path.display()));

    let config = DeployConfig::load_strict(config_path)?;

    let errors = validate(&config);
    if !errors.is_empty() {
        console::error("Configuration validation failed:");
        for message in &errors {
            console::error(format!("  - {}", message));
        }
        return Err(AppError::ValidationFailed(errors.len()));
    }

    console::info("✓ Required fields present");

    if config.database.kind == "sqlite" {
        console::info("✓ SQLite database configuration");
    } else {
        console::info(format!("✓ {} database configuration", config.database.kind));
    }

    if config.database.password.starts_with('$') {
        console::info("✓ Database password uses environment variable");
    } else if !config.database.password.is_empty() {
        console::warn("Consider using environment variables for sensitive data in CI/CD");
    }

    console::info("Configuration validation completed successfully");
    Ok(())
}
