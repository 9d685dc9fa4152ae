//! Configuration file loading for the CLI
//!
//! This module defines [`AppConfig`] and handles finding and loading TOML
//! configuration files from various locations (explicit path, local
//! directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::CliError;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

/// Top-level application configuration.
///
/// # Example
///
/// ```toml
/// [diagram]
/// schema = "prisma/schema.prisma"
///
/// [database]
/// url_key = "DATABASE_URL"
/// env_file = ".env"
/// sql_script = "create_missing_tables.sql"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram configuration section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Database configuration section.
    #[serde(default)]
    database: DatabaseConfig,
}

impl AppConfig {
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }
}

/// Settings for the `diagram` command.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Schema file rendered when no path is given on the command line.
    schema: PathBuf,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("prisma/schema.prisma"),
        }
    }
}

impl DiagramConfig {
    pub fn schema(&self) -> &Path {
        &self.schema
    }
}

/// Settings for the database commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Environment variable and env-file key holding the connection string.
    url_key: String,

    /// Fallback `key=value` file searched when the variable is unset.
    env_file: PathBuf,

    /// SQL script executed by `db-sync`.
    sql_script: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url_key: "DATABASE_URL".to_string(),
            env_file: PathBuf::from(".env"),
            sql_script: PathBuf::from("create_missing_tables.sql"),
        }
    }
}

impl DatabaseConfig {
    pub fn url_key(&self) -> &str {
        &self.url_key
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn sql_script(&self) -> &Path {
        &self.sql_script
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (schemaviz/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("schemaviz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "schemaviz", "schemaviz") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
