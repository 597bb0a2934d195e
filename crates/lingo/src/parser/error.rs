//! Parse error types for translation data.

use thiserror::Error;

/// An error that occurred while parsing a translation data source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input (e.g. an unterminated quoted string).
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// Location of the error as a (line, column) pair, 1-based.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } => (*line, *column),
            ParseError::UnexpectedEof { line, column } => (*line, *column),
        }
    }
}
