//! Locale-aware translation lookup, pluralization, and formatting.
//!
//! Translation data lives in nested key/value trees, one file per locale.
//! A request's locale preference list expands into a fallback chain; lookup
//! walks the chain and returns the first match, applying plural selection
//! and `%{name}` interpolation. Missing translations render as visible
//! placeholders instead of failing.

pub mod context;
pub mod error;
pub mod filters;
pub mod format;
pub mod loader;
pub mod locale;
pub mod parser;
pub mod tree;
pub mod types;

pub use context::{CoverageGap, I18n};
pub use error::LoadError;
pub use filters::{FilterFn, FilterRegistry, interpolate};
pub use loader::{FileSource, Source, load_locale};
pub use locale::{
    DEFAULT_LOCALE, Locale, LocaleData, OrdinalStyle, PluralCategory, fallback_chain,
    plural_category, pluralize,
};
pub use parser::{ParseError, parse_source};
pub use tree::{TranslationTree, compute_suggestions};
pub use types::{Entry, Lookup, Params, Untranslated, Value};

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so you can pass integers,
/// floats, strings, or dates directly.
///
/// # Example
///
/// ```
/// use lingo::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
