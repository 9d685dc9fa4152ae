//! Error types for the schemaviz CLI.
//!
//! Every variant is fatal: the binary reports it and exits with a non-zero
//! status.

use std::{io, path::PathBuf};

use thiserror::Error;

use schemaviz::SchemavizError;

use crate::config::ConfigError;

/// The error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Schemaviz(#[from] SchemavizError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not find `{key}` in the environment or in `{}`", .env_file.display())]
    MissingConnectionString { key: String, env_file: PathBuf },

    #[error("Failed to read SQL script `{}`: {source}", .path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database error: {0}")]
    Database(Box<dyn std::error::Error + Send + Sync>),
}
