//! One generator per output artifact.
//!
//! Generators are pure with respect to the output directory: each reads its
//! template, builds the replacement mapping from the configuration, and
//! returns the rendered [`Artifact`]. Writing (and the executable bit) is
//! the pipeline's job, and the rendered reverse-proxy text is threaded into
//! the deploy-script generator explicitly rather than read back from disk.

pub mod deploy_script;
pub mod process_manager;
pub mod reverse_proxy;

use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// A rendered artifact, ready to be written to the output directory.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Human-readable name used in progress and error reporting.
    pub label: &'static str,
    /// Fixed output filename.
    pub file_name: &'static str,
    /// Rendered content.
    pub content: String,
    /// Whether the written file must be marked executable.
    pub executable: bool,
}

fn read_template(template_dir: &Path, file_name: &str) -> Result<String, AppError> {
    let path = template_dir.join(file_name);
    if !path.exists() {
        return Err(AppError::TemplateNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(&path)?)
}
