//! The `I18n` facade: a locale preference list plus loaded translation
//! trees, queried by applications.
//!
//! Contexts are created per request or session and passed explicitly;
//! there is no process-wide or thread-local "current context" slot.

use std::cell::OnceCell;

use bon::Builder;
use tracing::debug;

use crate::error::LoadError;
use crate::filters::{FilterRegistry, interpolate};
use crate::loader::Source;
use crate::locale::{DEFAULT_LOCALE, Locale, fallback_chain, pluralize};
use crate::tree::{TranslationTree, compute_suggestions};
use crate::types::{Entry, Lookup, Params, Untranslated, Value};

/// A key present in one locale's data but missing from another's, as
/// reported by [`I18n::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    /// The missing key path.
    pub key: String,
    /// The locale the key is missing from.
    pub locale: String,
}

/// An i18n context: locale preferences plus translation data.
///
/// Application translations take precedence over extension translations for
/// the same locale; across locales, the fallback chain decides. Everything
/// is read-only after loading, so lookups are pure.
///
/// # Example
///
/// ```
/// use lingo::I18n;
///
/// let i18n = I18n::new(&["no", "en"]);
/// assert_eq!(i18n.locale().code(), "no");
/// assert_eq!(i18n.chain(), &["no", "en"]);
/// ```
#[derive(Builder)]
pub struct I18n {
    /// Requested locale codes, most preferred first. Duplicates are
    /// harmless no-ops.
    #[builder(default = vec![DEFAULT_LOCALE.to_string()])]
    locales: Vec<String>,

    /// Application translations, first priority per locale.
    #[builder(skip)]
    app: TranslationTree,

    /// Extension translations, consulted when the application lacks a key.
    #[builder(skip)]
    extensions: TranslationTree,

    /// Lazily expanded fallback chain.
    #[builder(skip)]
    chain: OnceCell<Vec<String>>,

    /// Named filters applicable to resolved translations.
    #[builder(skip)]
    filters: FilterRegistry,
}

impl I18n {
    /// Create a context for a locale preference list.
    pub fn new(locales: &[impl AsRef<str>]) -> I18n {
        I18n::builder()
            .locales(locales.iter().map(|c| c.as_ref().to_string()).collect())
            .build()
    }

    /// The requested locale codes.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The expanded fallback chain: requested codes, language prefixes and
    /// sub-locales, terminated by the default locale.
    pub fn chain(&self) -> &[String] {
        self.chain.get_or_init(|| fallback_chain(&self.locales))
    }

    /// The active locale used for formatting: the first supported requested
    /// code, or an unsupported placeholder echoing the request.
    pub fn locale(&self) -> Locale {
        Locale::resolve(&self.locales)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load application translations for every chain locale from a source.
    ///
    /// May be called multiple times; earlier sources win per key. Returns
    /// the number of locales the source had data for.
    pub fn load_source(&mut self, source: &dyn Source) -> Result<usize, LoadError> {
        let chain: Vec<String> = self.chain().to_vec();
        let mut loaded = 0;
        for code in &chain {
            if let Some(entry) = source.load(code)? {
                self.app.merge(code, entry);
                loaded += 1;
            }
        }
        debug!(locales = loaded, "loaded application translations");
        Ok(loaded)
    }

    /// Load extension translations for every chain locale from a source.
    ///
    /// Extension entries never override application entries for the same
    /// locale and key; they only fill gaps.
    pub fn load_extension(&mut self, source: &dyn Source) -> Result<usize, LoadError> {
        let chain: Vec<String> = self.chain().to_vec();
        let mut loaded = 0;
        for code in &chain {
            if let Some(entry) = source.load(code)? {
                self.extensions.merge(code, entry);
                loaded += 1;
            }
        }
        debug!(locales = loaded, "loaded extension translations");
        Ok(loaded)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Resolve a key path to its structured result.
    ///
    /// For each chain locale in preference order, application data is
    /// checked before extension data; the first non-empty value wins. A
    /// total miss returns an [`Untranslated`] marker carrying the key.
    pub fn translate(&self, key: &str) -> Lookup<'_> {
        for code in self.chain() {
            if let Some(entry) = self.app.lookup_in(code, key) {
                return Lookup::Found {
                    entry,
                    locale: code,
                };
            }
            if let Some(entry) = self.extensions.lookup_in(code, key) {
                return Lookup::Found {
                    entry,
                    locale: code,
                };
            }
        }
        Lookup::Missing(Untranslated::new(key, self.suggestions_for(key)))
    }

    /// Translate a key to a rendered string, without parameters.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &Params::new())
    }

    /// Translate a key with interpolation parameters.
    ///
    /// List-valued entries select a plural form by the `count` parameter
    /// (defaulting to 1) before interpolation. Missing keys render as a
    /// visible `[missing: key]` placeholder; key paths that address a
    /// container rather than a leaf render as `[subtree: key]`.
    pub fn t_with(&self, key: &str, params: &Params) -> String {
        let locale = self.locale();
        match self.translate(key) {
            Lookup::Found { entry, .. } => match entry {
                Entry::Text(text) => interpolate(text, params, &locale),
                Entry::List(forms) => {
                    let count = params
                        .get("count")
                        .and_then(Value::as_number)
                        .unwrap_or(1);
                    let form = pluralize(forms, count, &locale);
                    interpolate(form, params, &locale)
                }
                Entry::Map(_) => format!("[subtree: {key}]"),
            },
            Lookup::Missing(missing) => missing.to_string(),
        }
    }

    /// Translate a key and pass the result through named filters, in order.
    pub fn t_filtered(&self, key: &str, params: &Params, filters: &[&str]) -> String {
        let locale = self.locale();
        let mut text = self.t_with(key, params);
        for name in filters {
            text = self.filters.apply(name, text, &locale);
        }
        text
    }

    /// Render a parameter value the way the active locale writes it:
    /// numbers with its separators, dates through its patterns.
    pub fn l(&self, value: &Value) -> String {
        value.localize(&self.locale())
    }

    /// Render a date value through an explicit pattern instead of the
    /// locale's configured one. Non-date values fall back to [`I18n::l`].
    pub fn l_format(&self, value: &Value, pattern: &str) -> String {
        let locale = self.locale();
        match value {
            Value::DateTime(dt) => locale.strftime(dt, pattern),
            Value::Date(date) => {
                let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is a valid time");
                locale.strftime(&midnight, pattern)
            }
            other => other.localize(&locale),
        }
    }

    /// The filter registry, for lookups.
    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// The filter registry, for registering custom filters.
    pub fn filters_mut(&mut self) -> &mut FilterRegistry {
        &mut self.filters
    }

    /// Locale codes with any loaded data, sorted.
    pub fn available_locales(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .app
            .locales()
            .into_iter()
            .chain(self.extensions.locales())
            .map(str::to_string)
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Keys present in `source_code`'s data but missing from
    /// `target_code`'s, across application and extension data.
    pub fn validate(&self, source_code: &str, target_code: &str) -> Vec<CoverageGap> {
        let source_keys = self.loaded_leaf_keys(source_code);
        let target_keys = self.loaded_leaf_keys(target_code);
        source_keys
            .into_iter()
            .filter(|key| !target_keys.contains(key))
            .map(|key| CoverageGap {
                key,
                locale: target_code.to_string(),
            })
            .collect()
    }

    fn loaded_leaf_keys(&self, code: &str) -> Vec<String> {
        let mut keys = self.app.leaf_keys(code);
        for key in self.extensions.leaf_keys(code) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys.sort();
        keys
    }

    fn suggestions_for(&self, key: &str) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        for code in self.chain() {
            for candidate in self.loaded_leaf_keys(code) {
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }
        compute_suggestions(key, &candidates)
    }
}
