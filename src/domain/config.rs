//! Deployment configuration model, defaults, and loading.
//!
//! The configuration is a single nested record loaded from a JSON file.
//! Every field carries a production-sane default, and a partial file merges
//! field-by-field over those defaults at every nesting level: a
//! `"database": {"type": "mysql"}` override keeps the default host, port and
//! name. Unknown keys at any level are tolerated and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Full deployment configuration for one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Unique human identifier; drives derived paths.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Port the application listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of process-manager instances.
    #[serde(default = "default_instances")]
    pub instances: u32,
    /// Per-instance memory ceiling, e.g. "2G".
    #[serde(default = "default_max_memory")]
    pub max_memory: String,
    /// Absolute path the application is deployed to.
    #[serde(default = "default_deploy_path")]
    pub deploy_path: String,
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Environment file copied into the deploy path.
    #[serde(default = "default_env_file")]
    pub env_file: String,
    #[serde(default = "default_build_command")]
    pub build_command: String,
    #[serde(default = "default_start_command")]
    pub start_command: String,
    #[serde(default = "default_node_version")]
    pub node_version: String,
    #[serde(default)]
    pub ssl: SslConfig,
    #[serde(default)]
    pub nginx: NginxConfig,
    #[serde(default)]
    pub health_check: HealthCheckConfig,
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Database connection settings.
///
/// `kind` is kept as a free-form string rather than an enum so that the
/// connection-string derivation can fall back gracefully on unrecognized
/// values instead of rejecting the file at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// One of sqlite, mysql, postgresql, other.
    #[serde(rename = "type", default = "default_db_kind")]
    pub kind: String,
    /// On-disk database path (sqlite only).
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// TLS certificate settings for the reverse proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SslConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_cert_path")]
    pub cert_path: String,
    #[serde(default = "default_key_path")]
    pub key_path: String,
}

/// Reverse-proxy (nginx) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NginxConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default)]
    pub ssl_enabled: bool,
    #[serde(default = "default_proxy_pass")]
    pub proxy_pass: String,
}

/// Post-deploy health-check settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
    /// Seconds between probe attempts.
    #[serde(default = "default_health_interval")]
    pub interval: u32,
}

/// Scheduled backup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_backup_path")]
    pub path: String,
    /// Cron expression; defaults to daily at 2 AM.
    #[serde(default = "default_backup_schedule")]
    pub schedule: String,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Parsed from the given file.
    File(PathBuf),
    /// Fell back to the built-in defaults; carries the reason.
    Defaults(String),
}

impl DeployConfig {
    /// Load a configuration, falling back to the full defaults when the file
    /// is missing or fails to parse. Generation always has *some*
    /// configuration to work with; the fallback reason is reported by the
    /// caller as a warning, not an error.
    pub fn load(path: &Path) -> (Self, ConfigSource) {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                let reason = format!("Could not load config file {}: {}", path.display(), err);
                return (Self::default(), ConfigSource::Defaults(reason));
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(err) => {
                let reason = format!("Could not parse config file {}: {}", path.display(), err);
                (Self::default(), ConfigSource::Defaults(reason))
            }
        }
    }

    /// Load a configuration, treating a missing or malformed file as a hard
    /// error. Used by `ci-validate`, where silently substituting defaults
    /// would mask a broken pipeline.
    pub fn load_strict(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Serialize to pretty-printed JSON and write to `path`.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }

    /// Defaults specialized for an application name: deploy path, database
    /// path and name, domain, and backup path are derived from the name.
    pub fn for_app(name: &str) -> Self {
        let mut config = Self {
            app_name: name.to_string(),
            deploy_path: format!("/var/www/{}", name),
            ..Self::default()
        };
        config.database.path = format!("/var/lib/{}/database.db", name);
        config.database.name = sanitize_db_name(name);
        config.nginx.domain = format!("{}.example.com", name);
        config.backup.path = format!("/backup/{}", name);
        config
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            port: default_port(),
            instances: default_instances(),
            max_memory: default_max_memory(),
            deploy_path: default_deploy_path(),
            database: DatabaseConfig::default(),
            env_file: default_env_file(),
            build_command: default_build_command(),
            start_command: default_start_command(),
            node_version: default_node_version(),
            ssl: SslConfig::default(),
            nginx: NginxConfig::default(),
            health_check: HealthCheckConfig::default(),
            backup: BackupConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: default_db_kind(),
            path: default_db_path(),
            host: default_db_host(),
            port: default_db_port(),
            name: default_db_name(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { enabled: false, cert_path: default_cert_path(), key_path: default_key_path() }
    }
}

impl Default for NginxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            domain: default_domain(),
            ssl_enabled: false,
            proxy_pass: default_proxy_pass(),
        }
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self { enabled: true, path: default_health_path(), interval: default_health_interval() }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self { enabled: true, path: default_backup_path(), schedule: default_backup_schedule() }
    }
}

/// Database names allow only alphanumerics and underscores.
fn sanitize_db_name(name: &str) -> String {
    name.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}

fn default_app_name() -> String {
    "my-next-app".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_instances() -> u32 {
    2
}

fn default_max_memory() -> String {
    "2G".to_string()
}

fn default_deploy_path() -> String {
    "/var/www/my-next-app".to_string()
}

fn default_env_file() -> String {
    ".env.production".to_string()
}

fn default_build_command() -> String {
    "npm run build".to_string()
}

fn default_start_command() -> String {
    "npm start".to_string()
}

fn default_node_version() -> String {
    "18".to_string()
}

fn default_db_kind() -> String {
    "sqlite".to_string()
}

fn default_db_path() -> String {
    "/var/lib/my-next-app/database.db".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_name() -> String {
    "my_next_app".to_string()
}

fn default_cert_path() -> String {
    "/etc/ssl/certs/myapp.crt".to_string()
}

fn default_key_path() -> String {
    "/etc/ssl/private/myapp.key".to_string()
}

fn default_domain() -> String {
    "my-next-app.example.com".to_string()
}

fn default_proxy_pass() -> String {
    "http://localhost".to_string()
}

fn default_health_path() -> String {
    "/api/health".to_string()
}

fn default_health_interval() -> u32 {
    5
}

fn default_backup_path() -> String {
    "/backup/my-next-app".to_string()
}

fn default_backup_schedule() -> String {
    "0 2 * * *".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_production_sane() {
        let config = DeployConfig::default();

        assert_eq!(config.app_name, "my-next-app");
        assert_eq!(config.port, 3000);
        assert_eq!(config.instances, 2);
        assert_eq!(config.database.kind, "sqlite");
        assert_eq!(config.database.port, 3306);
        assert!(config.nginx.enabled);
        assert_eq!(config.nginx.domain, "my-next-app.example.com");
        assert!(config.health_check.enabled);
        assert_eq!(config.backup.schedule, "0 2 * * *");
    }

    #[test]
    fn partial_file_merges_field_by_field() {
        let json = r#"{"app_name": "shop", "database": {"type": "mysql"}}"#;
        let config: DeployConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.app_name, "shop");
        assert_eq!(config.database.kind, "mysql");
        // Unspecified nested fields keep their defaults.
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.name, "my_next_app");
        // Unspecified top-level fields keep their defaults.
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let json = r#"{"app_name": "shop", "flavor": "vanilla", "nginx": {"theme": "dark"}}"#;
        let config: DeployConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.app_name, "shop");
        assert!(config.nginx.enabled);
    }

    #[test]
    fn load_falls_back_on_missing_file() {
        let (config, source) = DeployConfig::load(Path::new("/nonexistent/config.json"));

        assert_eq!(config.app_name, "my-next-app");
        assert!(matches!(source, ConfigSource::Defaults(_)));
    }

    #[test]
    fn load_falls_back_on_malformed_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let (config, source) = DeployConfig::load(&path);

        assert_eq!(config.app_name, "my-next-app");
        match source {
            ConfigSource::Defaults(reason) => assert!(reason.contains("parse")),
            ConfigSource::File(_) => panic!("expected defaults fallback"),
        }
    }

    #[test]
    fn load_strict_fails_on_missing_file() {
        let result = DeployConfig::load_strict(Path::new("/nonexistent/config.json"));
        assert!(matches!(result, Err(AppError::ConfigNotFound(_))));
    }

    #[test]
    fn load_strict_fails_on_malformed_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = DeployConfig::load_strict(&path);
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("app.config.json");

        let config = DeployConfig::for_app("my-shop");
        config.save(&path).unwrap();

        let (loaded, source) = DeployConfig::load(&path);
        assert!(matches!(source, ConfigSource::File(_)));
        assert_eq!(loaded.app_name, "my-shop");
        assert_eq!(loaded.deploy_path, "/var/www/my-shop");
        assert_eq!(loaded.database.name, "my_shop");
        assert_eq!(loaded.nginx.domain, "my-shop.example.com");
    }

    #[test]
    fn for_app_derives_paths_from_name() {
        let config = DeployConfig::for_app("blog-2");

        assert_eq!(config.deploy_path, "/var/www/blog-2");
        assert_eq!(config.database.path, "/var/lib/blog-2/database.db");
        assert_eq!(config.database.name, "blog_2");
        assert_eq!(config.backup.path, "/backup/blog-2");
    }
}
