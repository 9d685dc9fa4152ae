//! Model builder turning scanned blocks into a [`Schema`].
//!
//! Each `model` block becomes a [`Model`] and each `enum` block an [`Enum`].
//! Lines that do not describe a field are skipped without error.

use log::{debug, trace};

use schemaviz_core::schema::{Enum, Field, Model, Schema};

use crate::scanner::{Block, BlockKind};

/// Prefix of a block-level directive such as `@@id([a, b])` or `@@map("users")`.
const BLOCK_DIRECTIVE_MARKER: &str = "@@";

/// Parse one interior line of a model block into a field.
///
/// Returns `None` for block directives and for lines with fewer than two
/// whitespace-separated tokens.
fn parse_field(line: &str) -> Option<Field> {
    if line.starts_with(BLOCK_DIRECTIVE_MARKER) {
        trace!(line; "Skipping block directive");
        return None;
    }

    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(name), Some(raw_type)) => Some(Field::new(name, raw_type, line)),
        _ => {
            debug!(line; "Skipping line without a field type");
            None
        }
    }
}

fn build_model(block: &Block<'_>) -> Model {
    let fields = block
        .lines
        .iter()
        .filter_map(|line| parse_field(line))
        .collect();

    Model::new(block.name, fields)
}

fn build_enum(block: &Block<'_>) -> Enum {
    let values = block.lines.iter().map(|line| line.to_string()).collect();

    Enum::new(block.name, values)
}

/// Build a schema from scanned blocks, preserving declaration order.
pub(crate) fn build(blocks: &[Block<'_>]) -> Schema {
    let mut schema = Schema::new();

    for block in blocks {
        match block.kind {
            BlockKind::Model => schema.insert_model(build_model(block)),
            BlockKind::Enum => schema.insert_enum(build_enum(block)),
        }
    }

    schema
}
