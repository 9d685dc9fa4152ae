//! Error types for schemaviz operations.
//!
//! Parsing and rendering never fail; only reading a schema from disk does.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for schemaviz operations.
#[derive(Debug, Error)]
pub enum SchemavizError {
    #[error("Failed to read schema `{}`: {source}", .path.display())]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
