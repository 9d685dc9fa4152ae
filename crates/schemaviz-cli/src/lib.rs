//! CLI logic for the schemaviz tool.
//!
//! This module dispatches each [`Command`] to the library: rendering a schema
//! as a Mermaid diagram, synchronising tables with the database, and seeding
//! default programs.

pub mod connection;
pub mod error_adapter;
pub mod seed;

mod args;
mod config;
#[cfg(feature = "postgres")]
mod database;
mod error;

pub use args::{Args, Command};
pub use error::CliError;

use std::{fs, path::Path};

use log::info;

#[cfg(feature = "postgres")]
use config::AppConfig;

/// Run the schemaviz CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Schema or script read errors
/// - Output write errors
/// - Connection string resolution and database errors
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Diagram { schema, output } => {
            let schema = schema
                .as_deref()
                .unwrap_or_else(|| app_config.diagram().schema());
            diagram(schema, output.as_deref())
        }
        #[cfg(feature = "postgres")]
        Command::DbSync { sql, env_file } => {
            let script = sql
                .as_deref()
                .unwrap_or_else(|| app_config.database().sql_script());
            db_sync(&app_config, script, env_file.as_deref())
        }
        #[cfg(feature = "postgres")]
        Command::Seed { env_file } => seed(&app_config, env_file.as_deref()),
    }
}

fn diagram(schema: &Path, output: Option<&Path>) -> Result<(), CliError> {
    info!(schema = schema.display().to_string(); "Generating diagram");

    let source = schemaviz::load_schema(schema)?;
    let diagram = schemaviz::generate(&source);

    match output {
        Some(path) => {
            fs::write(path, &diagram)?;
            info!(output_file = path.display().to_string(); "Diagram written");
        }
        None => print!("{diagram}"),
    }

    Ok(())
}

#[cfg(feature = "postgres")]
fn resolver(app_config: &AppConfig, env_file: Option<&Path>) -> connection::ConnectionResolver {
    let database = app_config.database();
    connection::ConnectionResolver::new(
        database.url_key(),
        env_file.unwrap_or_else(|| database.env_file()),
    )
}

#[cfg(feature = "postgres")]
fn db_sync(
    app_config: &AppConfig,
    script: &Path,
    env_file: Option<&Path>,
) -> Result<(), CliError> {
    let url = resolver(app_config, env_file).resolve()?;

    info!(script = script.display().to_string(); "Reading SQL script");
    let sql = fs::read_to_string(script).map_err(|source| CliError::ReadScript {
        path: script.to_path_buf(),
        source,
    })?;

    database::with_database(&url, |db| db.execute_script(&sql))?;
    info!("Database synchronised");

    Ok(())
}

#[cfg(feature = "postgres")]
fn seed(app_config: &AppConfig, env_file: Option<&Path>) -> Result<(), CliError> {
    let url = resolver(app_config, env_file).resolve()?;

    let outcome = database::with_database(&url, |db| {
        Ok(seed::seed_programs(db, &seed::DEFAULT_PROGRAMS)?)
    })?;
    info!(outcome:?; "Seeding finished");

    Ok(())
}
