//! # Schemaviz Parser
//!
//! Parser for Prisma-style data-model descriptions. This crate turns schema
//! source text into the structured [`Schema`] defined in `schemaviz-core`.
//!
//! Parsing is best effort and never fails: unknown declarations, block
//! directives and malformed field lines are skipped.
//!
//! ## Usage
//!
//! ```
//! use schemaviz_parser::parse;
//!
//! let source = r#"
//!     model Author {
//!       id    Int    @id
//!       books Book[]
//!     }
//!
//!     model Book {
//!       id     Int    @id
//!       author Author
//!     }
//! "#;
//!
//! let schema = parse(source);
//! assert_eq!(schema.model_count(), 2);
//! ```

mod builder;
mod scanner;

use log::debug;

use schemaviz_core::schema::Schema;

/// Parse source text into a schema.
///
/// This is the main entry point for parsing schema source code. It runs two
/// steps:
///
/// 1. **Scan** - Split the text into `model` and `enum` blocks
/// 2. **Build** - Turn each block into a model or an enum
pub fn parse(source: &str) -> Schema {
    let blocks = scanner::scan(source);
    debug!(blocks = blocks.len(); "Source scanned");

    let schema = builder::build(&blocks);
    debug!(
        models = schema.model_count(),
        enums = schema.enum_count();
        "Schema built"
    );

    schema
}
