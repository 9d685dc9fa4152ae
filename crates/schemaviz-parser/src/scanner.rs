//! Block scanner for schema source text.
//!
//! The scanner splits source text into [`Block`]s, one per `model` or `enum`
//! declaration, each carrying its name and trimmed interior lines. The public
//! entry point is [`scan`].
//!
//! Scanning never fails. Braces do not nest: a line that is exactly `}` always
//! closes the open block, and a new header implicitly ends the previous block.

use std::mem;

use log::trace;
use winnow::{
    Parser as _,
    ascii::space1,
    combinator::alt,
    error::ModalResult,
    token::{literal, take_while},
};

/// Prefix of a line comment.
const COMMENT_MARKER: &str = "//";

/// A line closing the current block.
const BLOCK_CLOSE: &str = "}";

/// Kind of declaration a block was opened by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Model,
    Enum,
}

/// A declaration block with its interior lines in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block<'src> {
    pub kind: BlockKind,
    pub name: &'src str,
    pub lines: Vec<&'src str>,
}

impl<'src> Block<'src> {
    fn new(kind: BlockKind, name: &'src str) -> Self {
        Self {
            kind,
            name,
            lines: Vec::new(),
        }
    }
}

/// Scanner state between lines.
#[derive(Debug, Default)]
enum State<'src> {
    /// Outside any declaration; lines are ignored.
    #[default]
    Idle,
    /// Inside a `model` or `enum` block; lines are accumulated.
    Open(Block<'src>),
}

/// Characters allowed in a declaration name.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse the declaration keyword.
fn keyword(input: &mut &str) -> ModalResult<BlockKind> {
    alt((
        literal("model").value(BlockKind::Model),
        literal("enum").value(BlockKind::Enum),
    ))
    .parse_next(input)
}

/// Parse a block header: `model <Name> {` or `enum <Name> {`.
///
/// Anything after the opening brace is ignored.
fn header<'src>(input: &mut &'src str) -> ModalResult<(BlockKind, &'src str)> {
    let kind = keyword.parse_next(input)?;
    space1.parse_next(input)?;
    let name = take_while(1.., is_word_char).parse_next(input)?;
    space1.parse_next(input)?;
    '{'.parse_next(input)?;

    Ok((kind, name))
}

/// Recognise a block header line, returning its kind and name.
fn parse_header(line: &str) -> Option<(BlockKind, &str)> {
    let mut input = line;
    header.parse_next(&mut input).ok()
}

/// Scan source text into declaration blocks.
///
/// Lines are trimmed; blank lines and `//` comments are dropped before any
/// other processing. An unterminated block at end of input keeps the lines it
/// collected.
pub(crate) fn scan(source: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut state = State::Idle;

    let lines = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER));

    for line in lines {
        if let Some((kind, name)) = parse_header(line) {
            trace!(kind:?, name; "Block opened");
            let previous = mem::replace(&mut state, State::Open(Block::new(kind, name)));
            if let State::Open(block) = previous {
                blocks.push(block);
            }
            continue;
        }

        if line == BLOCK_CLOSE {
            if let State::Open(block) = mem::take(&mut state) {
                blocks.push(block);
            }
            continue;
        }

        match &mut state {
            State::Open(block) => block.lines.push(line),
            State::Idle => trace!(line; "Ignoring line outside of any block"),
        }
    }

    if let State::Open(block) = state {
        trace!(name = block.name; "Keeping unterminated block");
        blocks.push(block);
    }

    blocks
}
