//! Schemaviz - Entity-relationship diagrams from data-model descriptions.
//!
//! Reads Prisma-style `model` and `enum` declarations, infers the
//! cardinality of every relationship from both sides' field declarations and
//! renders the result as a Mermaid `erDiagram` document.
//!
//! The pipeline is a pure function of its input: the same text always yields
//! byte-identical output.
//!
//! # Examples
//!
//! ```
//! let source = r#"
//!     model Author {
//!       id    Int    @id
//!       books Book[]
//!     }
//!
//!     model Book {
//!       id     Int    @id
//!       author Author @relation(fields: [authorId], references: [id])
//!     }
//! "#;
//!
//! let diagram = schemaviz::generate(source);
//! assert!(diagram.contains("Author ||--o{ Book : \"books\""));
//! ```

pub mod export;

mod error;
mod infer;

pub use schemaviz_core::{relationship, schema};
pub use schemaviz_parser::parse;

pub use error::SchemavizError;
pub use infer::infer_relationships;

use std::{fs, path::Path};

use log::{debug, info, trace};

use export::{Exporter, mermaid::Mermaid};
use schema::Schema;

/// Read schema source text from `path`.
///
/// # Errors
///
/// Returns [`SchemavizError::ReadSchema`] if the file cannot be read.
pub fn load_schema(path: impl AsRef<Path>) -> Result<String, SchemavizError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Reading schema");

    fs::read_to_string(path).map_err(|source| SchemavizError::ReadSchema {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a parsed schema as a Mermaid `erDiagram` document.
///
/// Relationships are inferred first, then model blocks, enum blocks and
/// relationship lines are written in that order.
pub fn render_mermaid(schema: &Schema) -> String {
    let relationships = infer_relationships(schema);
    debug!(relationships = relationships.len(); "Relationships inferred");

    let mut output = String::new();
    Mermaid::new(&mut output)
        .export_schema(schema, &relationships)
        .expect("Writing to String buffer is infallible");

    trace!(output = output.as_str(); "Rendered diagram");
    output
}

/// Parse schema source text and render it as a Mermaid `erDiagram` document.
pub fn generate(source: &str) -> String {
    let schema = parse(source);
    render_mermaid(&schema)
}
