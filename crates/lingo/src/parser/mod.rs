//! Parser for the translation data format.
//!
//! One file per locale, nested key/value trees with indentation-based
//! nesting, `- ` list items for plural forms, and `#` line comments.

mod error;
mod source;

pub use error::ParseError;
pub use source::parse_source;
