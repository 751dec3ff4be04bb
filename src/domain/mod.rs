mod config;
mod database;
mod error;
mod options;
mod validate;

pub use config::{
    BackupConfig, ConfigSource, DatabaseConfig, DeployConfig, HealthCheckConfig, NginxConfig,
    SslConfig,
};
pub use database::database_url;
pub use error::AppError;
pub use options::GenerateOptions;
pub use validate::validate;
