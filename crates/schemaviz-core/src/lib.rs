//! Schemaviz Core Types
//!
//! This crate provides the foundational types shared by the schemaviz
//! parser and diagram exporter. It includes:
//!
//! - **Schema**: Declared models and enums in declaration order ([`schema`] module)
//! - **Relationship**: Inferred links between models ([`relationship`] module)

pub mod relationship;
pub mod schema;
