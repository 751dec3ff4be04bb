//! shipgen: generate process-manager, nginx, and deploy-script artifacts
//! from a JSON deployment configuration.

use std::path::{Path, PathBuf};

use app::commands::{
    ci, deploy as deploy_cmd, generate as generate_cmd, init as init_cmd, setup as setup_cmd,
};
use services::ShellRunner;

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{
    AppError, ConfigSource, DeployConfig, GenerateOptions, database_url, validate,
};
pub use services::pipeline::{ArtifactOutcome, GenerationReport};

/// Write a ready-to-edit configuration file for `name` and materialize the
/// default templates. Returns the configuration file path.
pub fn init(name: Option<&str>, template_dir: &Path) -> Result<PathBuf, AppError> {
    init_cmd::execute(name, template_dir)
}

/// Run the interactive setup wizard. `None` means the user cancelled.
pub fn setup() -> Result<Option<PathBuf>, AppError> {
    setup_cmd::execute()
}

/// Generate all deployment artifacts from a configuration file.
pub fn generate(config_path: &Path, options: &GenerateOptions) -> Result<(), AppError> {
    generate_cmd::execute(config_path, options)
}

/// Generate all artifacts, then run the deployment script.
pub fn deploy(config_path: &Path, options: &GenerateOptions) -> Result<(), AppError> {
    let runner = ShellRunner::new();
    deploy_cmd::execute(config_path, options, &runner)
}

/// Print CI environment information and tool availability.
pub fn ci_status() -> Result<(), AppError> {
    let runner = ShellRunner::new();
    ci::status(&runner)
}

/// Strictly validate a configuration file for CI use.
pub fn ci_validate(config_path: &Path) -> Result<(), AppError> {
    ci::validate_config(config_path)
}
