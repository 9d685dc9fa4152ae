//! Command-line argument definitions for the schemaviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments control configuration file selection and
//! logging verbosity; each [`Command`] carries its own paths.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the schemaviz tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a schema as a Mermaid entity-relationship diagram
    Diagram {
        /// Path to the schema file [default: from config, `prisma/schema.prisma`]
        schema: Option<PathBuf>,

        /// Write the diagram to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Execute the table creation script against the database
    #[cfg(feature = "postgres")]
    DbSync {
        /// Path to the SQL script [default: from config, `create_missing_tables.sql`]
        #[arg(long)]
        sql: Option<PathBuf>,

        /// Fallback `key=value` file for the connection string
        #[arg(long)]
        env_file: Option<PathBuf>,
    },

    /// Insert the default programs if the programs table is empty
    #[cfg(feature = "postgres")]
    Seed {
        /// Fallback `key=value` file for the connection string
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
}
