//! Translation data source parser.
//!
//! The format is a nested key/value tree:
//!
//! ```text
//! # comment
//! greeting: "Hei, %{name}!"
//! user:
//!   name: Brukernavn
//!   messages:
//!     - "%{count} melding"
//!     - "%{count} meldinger"
//! ```
//!
//! Nesting is expressed by indentation (spaces only), scalars are bare or
//! double-quoted, and `- ` items form ordered lists. Comments occupy their
//! own line. Individual line contents are parsed with winnow; the
//! indentation structure is resolved over the lexed lines.

use std::collections::BTreeMap;

use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, rest, take_while};

use super::error::ParseError;
use crate::types::Entry;

/// Parse an entire translation data source into its root entry.
///
/// The top level of a source is always a mapping. Malformed input is a
/// fatal error for the whole source; there is no partial recovery.
pub fn parse_source(input: &str) -> Result<Entry, ParseError> {
    let lines = lex_lines(input)?;
    if lines.is_empty() {
        return Ok(Entry::empty());
    }
    if lines[0].content.starts_with('-') {
        return Err(ParseError::Syntax {
            line: lines[0].number,
            column: lines[0].indent + 1,
            message: "top level must be a mapping, not a list".to_string(),
        });
    }
    let mut pos = 0;
    let root = parse_block(&lines, &mut pos)?;
    if let Some(line) = lines.get(pos) {
        // Only reachable when the input dedents below the root indent.
        return Err(unexpected_indent(line));
    }
    Ok(root)
}

/// One significant line of input: blank and comment lines are dropped
/// during lexing.
struct Line<'a> {
    /// 1-based line number in the original input.
    number: usize,
    /// Count of leading spaces.
    indent: usize,
    /// Content with the indentation stripped.
    content: &'a str,
}

/// Split input into significant lines, validating indentation characters.
fn lex_lines(input: &str) -> Result<Vec<Line<'_>>, ParseError> {
    let mut lines = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let number = idx + 1;
        let trimmed_start = raw.trim_start_matches(' ');
        let indent = raw.len() - trimmed_start.len();
        if trimmed_start.starts_with('\t') {
            return Err(ParseError::Syntax {
                line: number,
                column: indent + 1,
                message: "tabs are not allowed in indentation".to_string(),
            });
        }
        let content = trimmed_start.trim_end();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        lines.push(Line {
            number,
            indent,
            content,
        });
    }
    Ok(lines)
}

/// Parse one block of sibling lines sharing the indent of `lines[*pos]`.
///
/// Consumes lines until the input dedents below the block indent. The block
/// is a list when its first line is a list item, a mapping otherwise.
fn parse_block(lines: &[Line<'_>], pos: &mut usize) -> Result<Entry, ParseError> {
    let block_indent = lines[*pos].indent;
    if lines[*pos].content.starts_with('-') {
        parse_list(lines, pos, block_indent).map(Entry::List)
    } else {
        parse_map(lines, pos, block_indent).map(Entry::Map)
    }
}

fn parse_list(
    lines: &[Line<'_>],
    pos: &mut usize,
    block_indent: usize,
) -> Result<Vec<String>, ParseError> {
    let mut items = Vec::new();
    while let Some(line) = lines.get(*pos) {
        if line.indent < block_indent {
            break;
        }
        if line.indent > block_indent {
            return Err(unexpected_indent(line));
        }
        if !line.content.starts_with('-') {
            return Err(ParseError::Syntax {
                line: line.number,
                column: line.indent + 1,
                message: "expected list item".to_string(),
            });
        }
        items.push(parse_content(line, list_item)?);
        *pos += 1;
    }
    Ok(items)
}

fn parse_map(
    lines: &[Line<'_>],
    pos: &mut usize,
    block_indent: usize,
) -> Result<BTreeMap<String, Entry>, ParseError> {
    let mut map = BTreeMap::new();
    while let Some(line) = lines.get(*pos) {
        if line.indent < block_indent {
            break;
        }
        if line.indent > block_indent {
            return Err(unexpected_indent(line));
        }
        if line.content.starts_with('-') {
            return Err(ParseError::Syntax {
                line: line.number,
                column: line.indent + 1,
                message: "unexpected list item in mapping".to_string(),
            });
        }
        let number = line.number;
        let column = line.indent + 1;
        let (key, value) = parse_content(line, key_line)?;
        if map.contains_key(&key) {
            return Err(ParseError::Syntax {
                line: number,
                column,
                message: format!("duplicate key '{key}'"),
            });
        }
        *pos += 1;
        let entry = match value {
            Some(text) => Entry::Text(text),
            None => match lines.get(*pos) {
                Some(child) if child.indent > block_indent => parse_block(lines, pos)?,
                _ => Entry::empty(),
            },
        };
        map.insert(key, entry);
    }
    Ok(map)
}

fn unexpected_indent(line: &Line<'_>) -> ParseError {
    ParseError::Syntax {
        line: line.number,
        column: line.indent + 1,
        message: "unexpected indentation".to_string(),
    }
}

/// Run a winnow content parser over one line, translating failures into a
/// positioned [`ParseError`].
fn parse_content<T>(
    line: &Line<'_>,
    parser: impl Fn(&mut &str) -> ModalResult<T>,
) -> Result<T, ParseError> {
    let mut remaining = line.content;
    match parser(&mut remaining) {
        Ok(value) => Ok(value),
        Err(_) => {
            let consumed = line.content.len() - remaining.len();
            let column = line.indent + consumed + 1;
            if remaining.is_empty() && line.content.contains('"') {
                Err(ParseError::UnexpectedEof {
                    line: line.number,
                    column,
                })
            } else {
                Err(ParseError::Syntax {
                    line: line.number,
                    column,
                    message: "malformed line".to_string(),
                })
            }
        }
    }
}

/// Parse a mapping line: `key:` or `key: value`.
fn key_line(input: &mut &str) -> ModalResult<(String, Option<String>)> {
    let key = key_ident(input)?;
    ws(input)?;
    ':'.parse_next(input)?;
    ws(input)?;
    if input.is_empty() {
        return Ok((key, None));
    }
    let value = scalar(input)?;
    end_of_line(input)?;
    Ok((key, Some(value)))
}

/// Parse a list item line: `- value`.
fn list_item(input: &mut &str) -> ModalResult<String> {
    '-'.parse_next(input)?;
    take_while(1.., |c: char| c == ' ').parse_next(input)?;
    let value = scalar(input)?;
    end_of_line(input)?;
    Ok(value)
}

/// Parse a key segment. Dots are reserved as the path separator and are not
/// valid inside keys.
fn key_ident(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || c == '_' || c == '-'
    })
    .map(|s: &str| s.to_string())
    .parse_next(input)
}

/// Parse a scalar value: double-quoted with escapes, or bare to end of line.
fn scalar(input: &mut &str) -> ModalResult<String> {
    if input.starts_with('"') {
        quoted(input)
    } else {
        rest.map(|s: &str| s.trim_end().to_string()).parse_next(input)
    }
}

/// Parse a double-quoted string supporting `\"`, `\\`, `\n`, and `\t`.
fn quoted(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut out = String::new();
    loop {
        let c = any.parse_next(input).map_err(ErrMode::cut)?;
        match c {
            '"' => return Ok(out),
            '\\' => {
                let escaped = any.parse_next(input).map_err(ErrMode::cut)?;
                match escaped {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    '"' => out.push('"'),
                    '\\' => out.push('\\'),
                    _ => return Err(ErrMode::Cut(ContextError::new())),
                }
            }
            other => out.push(other),
        }
    }
}

/// Require only trailing whitespace to remain.
fn end_of_line(input: &mut &str) -> ModalResult<()> {
    ws(input)?;
    if input.is_empty() {
        Ok(())
    } else {
        Err(ErrMode::Cut(ContextError::new()))
    }
}

/// Skip inline whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    let _ = opt(take_while(1.., |c: char| c == ' ')).parse_next(input)?;
    Ok(())
}
