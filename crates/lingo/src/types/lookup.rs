use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Entry;

/// Marker for a key path that no locale in the fallback chain could
/// translate.
///
/// Carries the original key so callers can render a visible placeholder
/// instead of aborting, plus nearby known keys as "did you mean"
/// suggestions. Displays as `[missing: the.key]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Untranslated {
    key: String,
    suggestions: Vec<String>,
}

impl Untranslated {
    /// Create a marker for `key` with precomputed suggestions.
    pub fn new(key: impl Into<String>, suggestions: Vec<String>) -> Untranslated {
        Untranslated {
            key: key.into(),
            suggestions,
        }
    }

    /// The key path that was requested.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Known key paths close to the requested one, best match first.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

impl Display for Untranslated {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[missing: {}]", self.key)
    }
}

/// The outcome of resolving a key path against a fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    /// A value was found; `locale` is the chain entry that supplied it.
    Found {
        entry: &'a Entry,
        locale: &'a str,
    },

    /// No locale in the chain had the key.
    Missing(Untranslated),
}

impl<'a> Lookup<'a> {
    /// True when a translation was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }

    /// The resolved entry, if any.
    pub fn entry(&self) -> Option<&'a Entry> {
        match self {
            Lookup::Found { entry, .. } => Some(entry),
            Lookup::Missing(_) => None,
        }
    }

    /// The locale code that supplied the value, if any.
    pub fn locale(&self) -> Option<&'a str> {
        match self {
            Lookup::Found { locale, .. } => Some(locale),
            Lookup::Missing(_) => None,
        }
    }
}
