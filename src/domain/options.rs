//! Generation options derived from CLI flags.

use std::path::PathBuf;

/// Immutable flags threaded into the generation pipeline.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Skip building the application in the deploy script.
    pub skip_build: bool,
    /// Skip installing dependencies in the deploy script.
    pub skip_deps: bool,
    /// Skip database migrations in the deploy script.
    pub skip_migrations: bool,
    /// Show what would be done without executing.
    pub dry_run: bool,
    /// Environment file to use instead of the configured one.
    pub env_file: Option<String>,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// Directory the templates are read from.
    pub template_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            skip_build: false,
            skip_deps: false,
            skip_migrations: false,
            dry_run: false,
            env_file: None,
            output_dir: PathBuf::from("./generated"),
            template_dir: PathBuf::from("./templates"),
        }
    }
}
