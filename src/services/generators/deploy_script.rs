//! Shell deployment-script artifact.
//!
//! The widest replacement mapping of the three: the full configuration,
//! the derived database URL, the generation flags, and the rendered
//! reverse-proxy config embedded as shell-safe text.

use std::path::Path;

use super::{Artifact, read_template};
use crate::domain::{AppError, DeployConfig, GenerateOptions, database_url};
use crate::services::renderer::{Replacements, escape_shell_embed, render};

pub const TEMPLATE_FILE: &str = "deploy.sh.template";
pub const OUTPUT_FILE: &str = "deploy.sh";
pub const LABEL: &str = "Deployment script";

/// `nginx_config` is the already-rendered reverse-proxy artifact text, or
/// the empty string when that artifact was not produced. It is escaped here
/// for double-quoted shell safety before entering the mapping.
pub fn generate(
    config: &DeployConfig,
    template_dir: &Path,
    options: &GenerateOptions,
    nginx_config: &str,
) -> Result<Artifact, AppError> {
    let template = read_template(template_dir, TEMPLATE_FILE)?;

    let env_file = options.env_file.as_deref().unwrap_or(&config.env_file);

    let mut vars = Replacements::new();
    vars.set("APP_NAME", &config.app_name);
    vars.set("PORT", config.port);
    vars.set("DEPLOY_PATH", &config.deploy_path);
    vars.set("DB_PATH", &config.database.path);
    vars.set("DB_TYPE", &config.database.kind);
    vars.set("DB_HOST", &config.database.host);
    vars.set("DB_PORT", config.database.port);
    vars.set("DB_NAME", &config.database.name);
    vars.set("DB_USERNAME", &config.database.username);
    vars.set("DB_PASSWORD", &config.database.password);
    vars.set("DATABASE_URL", database_url(config));
    vars.set("ENV_FILE", env_file);
    vars.set("BUILD_COMMAND", &config.build_command);
    vars.set("START_COMMAND", &config.start_command);
    vars.set("NGINX_ENABLED", config.nginx.enabled);
    vars.set("DOMAIN", &config.nginx.domain);
    vars.set("SSL_ENABLED", config.ssl.enabled);
    vars.set("NGINX_CONFIG", escape_shell_embed(nginx_config));
    vars.set("SKIP_BUILD", options.skip_build);
    vars.set("SKIP_DEPS", options.skip_deps);
    vars.set("SKIP_MIGRATIONS", options.skip_migrations);
    vars.set("DRY_RUN", options.dry_run);
    vars.set("BACKUP_ENABLED", config.backup.enabled);
    vars.set("BACKUP_PATH", &config.backup.path);
    vars.set("BACKUP_SCHEDULE", &config.backup.schedule);
    vars.set("HEALTH_CHECK_ENABLED", config.health_check.enabled);
    vars.set("HEALTH_CHECK_PATH", &config.health_check.path);
    vars.set("HEALTH_CHECK_INTERVAL", config.health_check.interval);

    Ok(Artifact {
        label: LABEL,
        file_name: OUTPUT_FILE,
        content: render(&template, &vars),
        executable: true,
    })
}
