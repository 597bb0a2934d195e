//! Locale identity, resolution, and fallback chains.
//!
//! The registry is a static metadata table; resolution never fails. A
//! request for an unknown code yields an [`Locale::Unsupported`] placeholder
//! that echoes the requested code and borrows the default locale's
//! formatting rules.

mod data;
mod plural;

pub use data::{LocaleData, OrdinalStyle};
pub use plural::{PluralCategory, plural_category, pluralize};

pub(crate) use data::normalize_code;

/// The locale whose rules back unsupported placeholders and terminate every
/// fallback chain.
pub const DEFAULT_LOCALE: &str = "en";

/// A resolved locale identity.
///
/// Either a known locale backed by static metadata, or a placeholder for a
/// code the registry does not know. The placeholder keeps the requested
/// code visible while formatting through the default locale's rules, so
/// rendering never fails on an exotic `Accept-Language` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locale {
    /// A known locale.
    Supported(&'static LocaleData),

    /// A locale the registry does not know, carrying the requested code.
    Unsupported { code: String },
}

impl Locale {
    /// Resolve a preference list to a locale.
    ///
    /// Walks the requested codes in order and returns the first known
    /// locale. When none match, returns an [`Locale::Unsupported`]
    /// placeholder echoing the first requested code; an empty request
    /// resolves to the default locale. Absence of a match is a normal,
    /// representable outcome, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use lingo::Locale;
    ///
    /// let locale = Locale::resolve(&["xx", "no"]);
    /// assert_eq!(locale.code(), "no");
    ///
    /// let placeholder = Locale::resolve(&["tlh"]);
    /// assert_eq!(placeholder.code(), "tlh");
    /// assert!(!placeholder.is_supported());
    /// ```
    pub fn resolve(requested: &[impl AsRef<str>]) -> Locale {
        for code in requested {
            if let Some(data) = LocaleData::find(code.as_ref()) {
                return Locale::Supported(data);
            }
        }
        match requested.first() {
            Some(code) => Locale::Unsupported {
                code: normalize_code(code.as_ref()),
            },
            None => Locale::default(),
        }
    }

    /// The locale code: the known code, or the requested code for
    /// unsupported placeholders.
    pub fn code(&self) -> &str {
        match self {
            Locale::Supported(data) => data.code,
            Locale::Unsupported { code } => code,
        }
    }

    /// The locale title. Unsupported placeholders have no metadata and echo
    /// their code.
    pub fn title(&self) -> &str {
        match self {
            Locale::Supported(data) => data.title,
            Locale::Unsupported { code } => code,
        }
    }

    /// Whether this locale is backed by registry metadata.
    pub fn is_supported(&self) -> bool {
        matches!(self, Locale::Supported(_))
    }

    /// Formatting metadata: the locale's own for supported locales, the
    /// default locale's for placeholders.
    pub fn data(&self) -> &'static LocaleData {
        match self {
            Locale::Supported(data) => data,
            Locale::Unsupported { .. } => {
                LocaleData::find(DEFAULT_LOCALE).expect("default locale is registered")
            }
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Supported(LocaleData::find(DEFAULT_LOCALE).expect("default locale is registered"))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Expand a preference list into the full translation fallback chain.
///
/// Each requested code is followed by the language part of region-qualified
/// codes and by the locale's registered sub-locales; the default locale
/// terminates the chain. Duplicates are dropped, preserving first
/// occurrence, so repeated requests are harmless no-ops.
///
/// # Example
///
/// ```
/// use lingo::fallback_chain;
///
/// assert_eq!(fallback_chain(&["no"]), vec!["no", "en"]);
/// assert_eq!(fallback_chain(&["de-AT", "fr"]), vec!["de-at", "de", "fr", "en"]);
/// ```
pub fn fallback_chain(requested: &[impl AsRef<str>]) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    let push = |code: String, chain: &mut Vec<String>| {
        if !code.is_empty() && !chain.contains(&code) {
            chain.push(code);
        }
    };
    for code in requested {
        let normalized = normalize_code(code.as_ref());
        push(normalized.clone(), &mut chain);
        if let Some(language) = normalized.split('-').next() {
            if language != normalized {
                push(language.to_string(), &mut chain);
            }
        }
        if let Some(data) = LocaleData::find(&normalized) {
            for sub in data.sublocales {
                push((*sub).to_string(), &mut chain);
            }
        }
    }
    push(DEFAULT_LOCALE.to_string(), &mut chain);
    chain
}
