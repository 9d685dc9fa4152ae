//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error type and miette's
//! graphical report formatting.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use schemaviz::SchemavizError;

use crate::{CliError, config::ConfigError};

/// Adapter rendering a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Schemaviz(SchemavizError::ReadSchema { .. }) | CliError::Io(_) => {
                "schemaviz::io"
            }
            CliError::Config(_) => "schemaviz::config",
            CliError::MissingConnectionString { .. } => "schemaviz::env",
            CliError::ReadScript { .. } => "schemaviz::sql",
            CliError::Database(_) => "schemaviz::database",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: String = match self.0 {
            CliError::Schemaviz(SchemavizError::ReadSchema { .. }) => {
                "pass the schema path explicitly or set `diagram.schema` in the config file"
                    .to_string()
            }
            CliError::Config(ConfigError::MissingFile(_)) => {
                "check the path given to `--config`".to_string()
            }
            CliError::MissingConnectionString { key, .. } => {
                format!("export `{key}` or add a `{key}=...` line to the env file")
            }
            CliError::ReadScript { .. } => {
                "pass the script path with `--sql` or set `database.sql_script`".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    fn code_of(err: &CliError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes() {
        let read = CliError::from(SchemavizError::ReadSchema {
            path: PathBuf::from("schema.prisma"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        let missing = CliError::MissingConnectionString {
            key: "DATABASE_URL".to_string(),
            env_file: PathBuf::from(".env"),
        };
        let config = CliError::from(ConfigError::Parse("bad".to_string()));

        assert_eq!(code_of(&read).as_deref(), Some("schemaviz::io"));
        assert_eq!(code_of(&missing).as_deref(), Some("schemaviz::env"));
        assert_eq!(code_of(&config).as_deref(), Some("schemaviz::config"));
    }

    #[test]
    fn test_display_passes_through() {
        let err = CliError::MissingConnectionString {
            key: "DATABASE_URL".to_string(),
            env_file: PathBuf::from(".env"),
        };

        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Could not find `DATABASE_URL` in the environment or in `.env`"
        );
    }

    #[test]
    fn test_help_mentions_key() {
        let err = CliError::MissingConnectionString {
            key: "POSTGRES_URL".to_string(),
            env_file: PathBuf::from(".env"),
        };

        let help = ErrorAdapter(&err).help().map(|h| h.to_string());

        assert!(help.is_some_and(|h| h.contains("POSTGRES_URL")));
    }

    #[test]
    fn test_io_has_no_help() {
        let err = CliError::from(io::Error::other("disk full"));

        assert!(ErrorAdapter(&err).help().is_none());
    }

    #[test]
    fn test_renders_report() {
        let err = CliError::ReadScript {
            path: PathBuf::from("create_missing_tables.sql"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let mut out = String::new();

        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .expect("Failed to render report");

        assert!(out.contains("create_missing_tables.sql"));
        assert!(out.contains("schemaviz::sql"));
    }
}
