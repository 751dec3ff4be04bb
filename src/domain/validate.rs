//! Structural and cross-field configuration validation.

use crate::domain::DeployConfig;

/// Check all validation rules independently and collect every violation.
///
/// An empty result means the configuration is accepted. Rules never
/// short-circuit: a configuration missing three things reports three
/// messages.
pub fn validate(config: &DeployConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.app_name.is_empty() {
        errors.push("app_name is required".to_string());
    }

    if config.deploy_path.is_empty() {
        errors.push("deploy_path is required".to_string());
    }

    if config.nginx.enabled && config.nginx.domain.is_empty() {
        errors.push("nginx.domain is required when nginx is enabled".to_string());
    }

    if config.backup.enabled && config.backup.path.is_empty() {
        errors.push("backup.path is required when backup is enabled".to_string());
    }

    if config.database.kind != "sqlite" {
        if config.database.host.is_empty() {
            errors.push("database.host is required for non-sqlite databases".to_string());
        }
        if config.database.username.is_empty() {
            errors.push("database.username is required for non-sqlite databases".to_string());
        }
        if config.database.name.is_empty() {
            errors.push("database.name is required for non-sqlite databases".to_string());
        }
    }

    errors
}
