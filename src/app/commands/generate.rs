//! Generate command - renders all deployment artifacts.

use std::path::Path;

use crate::app::console;
use crate::domain::{AppError, ConfigSource, DeployConfig, GenerateOptions, validate};
use crate::services::{pipeline, templates};

/// Execute the generate command.
///
/// Loads the configuration (falling back to defaults with a warning when the
/// file is missing or malformed), validates it, materializes the embedded
/// templates when the template directory does not exist, and runs the
/// artifact pipeline. Validation failure aborts before anything is written,
/// with every violation reported.
pub fn execute(config_path: &Path, options: &GenerateOptions) -> Result<(), AppError> {
    console::info("Starting deployment setup...");

    if options.dry_run {
        console::info("DRY RUN MODE: Showing what would be done without executing");
    }

    let (config, source) = DeployConfig::load(config_path);
    if let ConfigSource::Defaults(reason) = &source {
        console::warn(reason);
        console::warn("Using default configuration");
    }

    let errors = validate(&config);
    if !errors.is_empty() {
        console::error("Configuration validation failed:");
        for message in &errors {
            console::error(format!("  - {}", message));
        }
        return Err(AppError::ValidationFailed(errors.len()));
    }

    if !options.template_dir.exists() {
        let written = templates::materialize(&options.template_dir)?;
        console::info(format!(
            "Created template directory {} with {} default template(s)",
            options.template_dir.display(),
            written.len()
        ));
    }

    let report = pipeline::generate_artifacts(&config, options)?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(path) => console::info(format!("{} generated: {}", outcome.label, path.display())),
            Err(err) => console::error(format!("{}: {}", outcome.label, err)),
        }
    }
    for warning in &report.warnings {
        console::warn(warning);
    }

    if !report.success() {
        return Err(AppError::GenerationFailed);
    }

    console::info("All configuration files generated successfully!");
    console::info(format!("Output directory: {}", options.output_dir.display()));
    console::info("To deploy your application, run:");
    console::info(format!("  cd {}", options.output_dir.display()));
    console::info("  ./deploy.sh");

    if options.dry_run {
        console::info("Note: This was a dry run. No actual deployment was performed.");
    }

    Ok(())
}
