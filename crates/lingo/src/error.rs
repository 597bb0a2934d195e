//! Error types for translation loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading translation data.
///
/// Lookup misses are not errors; they are represented values (see
/// [`Untranslated`](crate::Untranslated)). `LoadError` covers only the
/// load step: unreadable files and malformed sources.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a translation source.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with source location context. Fatal for the source; the
    /// loader does not attempt partial recovery within a malformed file.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// Wrap a [`ParseError`](crate::ParseError) with the path it came from.
    pub fn parse(path: impl Into<PathBuf>, err: &crate::ParseError) -> LoadError {
        let (line, column) = err.position();
        let message = match err {
            crate::ParseError::Syntax { message, .. } => message.clone(),
            crate::ParseError::UnexpectedEof { .. } => "unexpected end of input".to_string(),
        };
        LoadError::Parse {
            path: path.into(),
            line,
            column,
            message,
        }
    }
}
