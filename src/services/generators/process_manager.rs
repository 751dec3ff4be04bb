//! Process-manager (PM2) configuration artifact.

use std::path::Path;

use super::{Artifact, read_template};
use crate::domain::{AppError, DeployConfig};
use crate::services::renderer::{Replacements, render};

pub const TEMPLATE_FILE: &str = "ecosystem.config.template";
pub const OUTPUT_FILE: &str = "ecosystem.config.js";
pub const LABEL: &str = "PM2 configuration";

pub fn generate(config: &DeployConfig, template_dir: &Path) -> Result<Artifact, AppError> {
    let template = read_template(template_dir, TEMPLATE_FILE)?;

    let mut vars = Replacements::new();
    vars.set("APP_NAME", &config.app_name);
    vars.set("PORT", config.port);
    vars.set("INSTANCES", config.instances);
    vars.set("MAX_MEMORY", &config.max_memory);
    vars.set("NODE_VERSION", &config.node_version);
    vars.set("START_COMMAND", &config.start_command);

    Ok(Artifact {
        label: LABEL,
        file_name: OUTPUT_FILE,
        content: render(&template, &vars),
        executable: false,
    })
}
