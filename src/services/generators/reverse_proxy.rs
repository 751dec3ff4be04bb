//! Reverse-proxy (nginx) configuration artifact.

use std::path::Path;

use super::{Artifact, read_template};
use crate::domain::{AppError, DeployConfig};
use crate::services::renderer::{Replacements, render};

pub const TEMPLATE_FILE: &str = "nginx.config.template";
pub const OUTPUT_FILE: &str = "nginx.config.generated";
pub const LABEL: &str = "Nginx configuration";

pub fn generate(config: &DeployConfig, template_dir: &Path) -> Result<Artifact, AppError> {
    let template = read_template(template_dir, TEMPLATE_FILE)?;

    let mut vars = Replacements::new();
    vars.set("DOMAIN", &config.nginx.domain);
    vars.set("PORT", config.port);
    vars.set("SSL_ENABLED", config.nginx.ssl_enabled);
    vars.set("CERT_PATH", &config.ssl.cert_path);
    vars.set("KEY_PATH", &config.ssl.key_path);
    vars.set("PROXY_PASS", &config.nginx.proxy_pass);
    vars.set("HEALTH_CHECK_PATH", &config.health_check.path);

    Ok(Artifact {
        label: LABEL,
        file_name: OUTPUT_FILE,
        content: render(&template, &vars),
        executable: false,
    })
}
