//! Init command - writes a ready-to-edit configuration file.

use std::path::{Path, PathBuf};

use crate::app::console;
use crate::domain::{AppError, DeployConfig};
use crate::services::templates;

/// Execute the init command.
///
/// Writes `<name>.config.json` in the current directory with defaults
/// derived from the application name, and materializes the default templates
/// so a following `generate` works out of the box. Returns the path of the
/// configuration file.
pub fn execute(name: Option<&str>, template_dir: &Path) -> Result<PathBuf, AppError> {
    let name = name.unwrap_or("my-next-app");
    let config = DeployConfig::for_app(name);

    let config_path = PathBuf::from(format!("{}.config.json", name));
    config.save(&config_path)?;
    console::info(format!("Configuration file created: {}", config_path.display()));

    let written = templates::materialize(template_dir)?;
    if !written.is_empty() {
        console::info(format!(
            "Default templates written to {}: {}",
            template_dir.display(),
            written.join(", ")
        ));
    }

    console::info("Edit this file to customize your deployment settings");
    console::info("To generate deployment files, run:");
    console::info(format!("  shipgen generate {}", config_path.display()));

    Ok(config_path)
}
