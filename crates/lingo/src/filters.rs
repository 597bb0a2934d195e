//! Post-processing of resolved translations: `%{name}` interpolation and
//! named string filters.

use std::collections::HashMap;

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;
use unicode_segmentation::UnicodeSegmentation;

use crate::locale::Locale;
use crate::types::Params;

/// Substitute `%{name}` placeholders in a template.
///
/// Each placeholder is replaced by the locale-aware string form of the
/// matching parameter (numbers through the locale's separators, dates
/// through its date pattern). Unmatched placeholders are left verbatim so
/// partially-translated strings still render; `%%{` escapes a literal
/// `%{`.
///
/// # Example
///
/// ```
/// use lingo::{Locale, interpolate, params};
///
/// let en = Locale::resolve(&["en"]);
/// let out = interpolate("Hi %{name}", &params! { "name" => "Bo" }, &en);
/// assert_eq!(out, "Hi Bo");
///
/// let out = interpolate("Hi %{missing}", &params! {}, &en);
/// assert_eq!(out, "Hi %{missing}");
/// ```
pub fn interpolate(template: &str, params: &Params, locale: &Locale) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(idx) = rest.find("%{") {
        if idx > 0 && rest.as_bytes()[idx - 1] == b'%' {
            // "%%{" escapes the placeholder opener.
            out.push_str(&rest[..idx - 1]);
            out.push_str("%{");
            rest = &rest[idx + 2..];
            continue;
        }
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[idx..]);
            return out;
        };
        let name = &after[..end];
        match params.get(name) {
            Some(value) if is_placeholder_name(name) => {
                out.push_str(&value.localize(locale));
            }
            _ => {
                out.push_str(&rest[idx..idx + 2 + end + 1]);
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A named string filter applied to a resolved translation.
pub type FilterFn = fn(String, &Locale) -> String;

/// Registry of named filters.
///
/// Built-in filters (`capitalize`, `upcase`, `downcase`) are always
/// available; applications may register their own, and registered names
/// shadow the built-ins.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    custom: HashMap<String, FilterFn>,
}

impl FilterRegistry {
    /// Create a registry with only the built-in filters.
    pub fn new() -> FilterRegistry {
        FilterRegistry::default()
    }

    /// Register a custom filter. Re-registering a name replaces the
    /// previous filter.
    pub fn register(&mut self, name: impl Into<String>, filter: FilterFn) {
        self.custom.insert(name.into(), filter);
    }

    /// Look up a filter by name, custom filters first.
    pub fn get(&self, name: &str) -> Option<FilterFn> {
        if let Some(f) = self.custom.get(name) {
            return Some(*f);
        }
        builtin(name)
    }

    /// Whether a filter with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Apply a filter by name. Unknown names leave the input unchanged.
    pub fn apply(&self, name: &str, text: String, locale: &Locale) -> String {
        match self.get(name) {
            Some(f) => f(text, locale),
            None => text,
        }
    }
}

fn builtin(name: &str) -> Option<FilterFn> {
    match name {
        "capitalize" => Some(capitalize),
        "upcase" => Some(upcase),
        "downcase" => Some(downcase),
        _ => None,
    }
}

fn language_id(locale: &Locale) -> LanguageIdentifier {
    locale
        .data()
        .language()
        .parse()
        .unwrap_or(LanguageIdentifier::UNKNOWN)
}

/// Uppercase the first grapheme, leaving the rest untouched.
fn capitalize(text: String, locale: &Locale) -> String {
    let mut graphemes = text.graphemes(true);
    let Some(first) = graphemes.next() else {
        return text;
    };
    let mapper = CaseMapper::new();
    let mut out = mapper
        .uppercase_to_string(first, &language_id(locale))
        .into_owned();
    out.push_str(graphemes.as_str());
    out
}

fn upcase(text: String, locale: &Locale) -> String {
    CaseMapper::new()
        .uppercase_to_string(&text, &language_id(locale))
        .into_owned()
}

fn downcase(text: String, locale: &Locale) -> String {
    CaseMapper::new()
        .lowercase_to_string(&text, &language_id(locale))
        .into_owned()
}
