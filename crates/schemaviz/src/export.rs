//! Export functionality for schema diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a parsed schema and its inferred relationships into an output
//! format. It is the final stage in the schemaviz pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Schema
//!     ↓ infer
//! Relationships
//!     ↓ export (this module)
//! Diagram Text
//! ```
//!
//! # Available Backends
//!
//! - [`mermaid`] - Mermaid `erDiagram` output via [`mermaid::Mermaid`]

/// Mermaid export backend.
pub mod mermaid;

use std::fmt;

use schemaviz_core::{relationship::Relationship, schema::Schema};

/// Abstraction for diagram export backends.
///
/// Implementors write a schema and its relationships in a specific textual
/// format. Output goes to any [`fmt::Write`] sink the backend wraps.
pub trait Exporter {
    /// Exports a schema with its already inferred relationships.
    ///
    /// # Arguments
    ///
    /// * `schema` - Models and enums in declaration order.
    /// * `relationships` - Relationships in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] only if the underlying writer fails.
    fn export_schema(&mut self, schema: &Schema, relationships: &[Relationship]) -> fmt::Result;
}
