//! Setup command - interactive configuration wizard.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::app::console;
use crate::domain::{AppError, DeployConfig};

const DATABASE_KINDS: [&str; 4] = ["sqlite", "mysql", "postgresql", "other"];

/// Run the interactive setup wizard.
///
/// Walks through the deployment settings and writes
/// `<app_name>.config.json`. Returns `None` when the user cancels with
/// Ctrl-C at any prompt.
pub fn execute() -> Result<Option<PathBuf>, AppError> {
    console::info("Welcome to the deployment setup wizard!");
    console::info("This wizard will help you configure your deployment settings.");

    let Some(app_name) = prompt_text("Application name", "my-next-app")? else {
        return Ok(None);
    };
    let mut config = DeployConfig::for_app(&app_name);

    let Some(port) = prompt_parsed("Port", config.port)? else {
        return Ok(None);
    };
    config.port = port;

    let Some(instances) = prompt_parsed("Number of instances", config.instances)? else {
        return Ok(None);
    };
    config.instances = instances;

    let Some(max_memory) = prompt_text("Maximum memory per instance", &config.max_memory)? else {
        return Ok(None);
    };
    config.max_memory = max_memory;

    let Some(domain) = prompt_text("Domain name", &config.nginx.domain)? else {
        return Ok(None);
    };
    config.nginx.domain = domain;

    let Some(kind_index) = prompt_select("Database type", &DATABASE_KINDS)? else {
        return Ok(None);
    };
    config.database.kind = DATABASE_KINDS[kind_index].to_string();

    if config.database.kind == "sqlite" {
        config.database.path = format!("/var/lib/{}/database.db", config.app_name);
    } else {
        let Some(host) = prompt_text("Database host", "localhost")? else {
            return Ok(None);
        };
        config.database.host = host;

        let default_port = if config.database.kind == "mysql" { 3306 } else { 5432 };
        let Some(db_port) = prompt_parsed("Database port", default_port)? else {
            return Ok(None);
        };
        config.database.port = db_port;

        let Some(db_name) = prompt_text("Database name", &config.database.name)? else {
            return Ok(None);
        };
        config.database.name = db_name;

        let Some(username) = prompt_text("Database username", "")? else {
            return Ok(None);
        };
        config.database.username = username;

        let Some(password) = prompt_password("Database password")? else {
            return Ok(None);
        };
        config.database.password = password;
    }

    let Some(ssl) = prompt_confirm("Enable SSL?", false)? else {
        return Ok(None);
    };
    config.ssl.enabled = ssl;
    config.nginx.ssl_enabled = ssl;

    let Some(backups) = prompt_confirm("Enable automated backups?", false)? else {
        return Ok(None);
    };
    config.backup.enabled = backups;

    let Some(health) = prompt_confirm("Enable health checks?", true)? else {
        return Ok(None);
    };
    config.health_check.enabled = health;

    let config_path = PathBuf::from(format!("{}.config.json", config.app_name));
    config.save(&config_path)?;

    console::info(format!("Configuration file created: {}", config_path.display()));
    console::info("Edit this file to customize your deployment settings");
    console::info("To generate deployment files, run:");
    console::info(format!("  shipgen generate {}", config_path.display()));

    Ok(Some(config_path))
}

fn prompt_text(prompt: &str, default: &str) -> Result<Option<String>, AppError> {
    let input = Input::new().with_prompt(prompt).default(default.to_string()).interact_text();
    map_prompt(prompt, input)
}

fn prompt_parsed<T>(prompt: &str, default: T) -> Result<Option<T>, AppError>
where
    T: Clone + ToString + std::str::FromStr,
    T::Err: std::fmt::Display + std::fmt::Debug,
{
    let input = Input::new().with_prompt(prompt).default(default).interact_text();
    map_prompt(prompt, input)
}

fn prompt_password(prompt: &str) -> Result<Option<String>, AppError> {
    let input = Password::new().with_prompt(prompt).allow_empty_password(true).interact();
    map_prompt(prompt, input)
}

fn prompt_confirm(prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
    let input = Confirm::new().with_prompt(prompt).default(default).interact();
    map_prompt(prompt, input)
}

fn prompt_select(prompt: &str, items: &[&str]) -> Result<Option<usize>, AppError> {
    let input = Select::new().with_prompt(prompt).items(items).default(0).interact();
    map_prompt(prompt, input)
}

/// Ctrl-C is a graceful cancel, anything else is an error.
fn map_prompt<T>(prompt: &str, result: Result<T, DialoguerError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read '{}': {}", prompt, err))),
    }
}
