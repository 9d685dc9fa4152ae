//! Mermaid `erDiagram` rendering.
//!
//! Produces text of the form:
//!
//! ```text
//! erDiagram
//!   Author {
//!     Int id
//!   }
//!   Role {
//!     value ADMIN
//!   }
//!   Author ||--o{ Book : "books"
//! ```

use std::fmt::{self, Write};

use schemaviz_core::{
    relationship::Relationship,
    schema::{Enum, Model, Schema},
};

use super::Exporter;

/// Root marker of an entity-relationship diagram.
const DIAGRAM_HEADER: &str = "erDiagram";

/// Attribute name under which enum values are listed.
const ENUM_VALUE_ATTRIBUTE: &str = "value";

/// Indentation of entity blocks and relationship lines.
const ENTITY_INDENT: &str = "  ";

/// Indentation of attribute lines inside an entity block.
const ATTRIBUTE_INDENT: &str = "    ";

/// Mermaid exporter writing into a [`fmt::Write`] sink.
///
/// # Examples
///
/// ```
/// use schemaviz::export::{Exporter, mermaid::Mermaid};
///
/// let schema = schemaviz::parse("model Tag {\n  id Int\n}\n");
/// let mut output = String::new();
/// Mermaid::new(&mut output)
///     .export_schema(&schema, &[])
///     .expect("Writing to String buffer is infallible");
///
/// assert_eq!(output, "erDiagram\n  Tag {\n    Int id\n  }\n");
/// ```
pub struct Mermaid<W> {
    writer: W,
}

impl<W: Write> Mermaid<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the exporter and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a model block listing every field that is not a relation.
    fn write_model(&mut self, schema: &Schema, model: &Model) -> fmt::Result {
        writeln!(self.writer, "{ENTITY_INDENT}{} {{", model.name())?;
        for field in model.fields() {
            if schema.is_model(field.base_type()) {
                continue;
            }
            writeln!(
                self.writer,
                "{ATTRIBUTE_INDENT}{} {}",
                field.base_type(),
                field.name()
            )?;
        }
        writeln!(self.writer, "{ENTITY_INDENT}}}")
    }

    fn write_enum(&mut self, enumeration: &Enum) -> fmt::Result {
        writeln!(self.writer, "{ENTITY_INDENT}{} {{", enumeration.name())?;
        for value in enumeration.values() {
            writeln!(self.writer, "{ATTRIBUTE_INDENT}{ENUM_VALUE_ATTRIBUTE} {value}")?;
        }
        writeln!(self.writer, "{ENTITY_INDENT}}}")
    }

    fn write_relationship(&mut self, relationship: &Relationship) -> fmt::Result {
        writeln!(
            self.writer,
            "{ENTITY_INDENT}{} {} {} : \"{}\"",
            relationship.left(),
            relationship.cardinality().connector(),
            relationship.right(),
            relationship.label()
        )
    }
}

impl<W: Write> Exporter for Mermaid<W> {
    fn export_schema(&mut self, schema: &Schema, relationships: &[Relationship]) -> fmt::Result {
        writeln!(self.writer, "{DIAGRAM_HEADER}")?;

        for model in schema.models() {
            self.write_model(schema, model)?;
        }

        for enumeration in schema.enums() {
            self.write_enum(enumeration)?;
        }

        for relationship in relationships {
            self.write_relationship(relationship)?;
        }

        Ok(())
    }
}
