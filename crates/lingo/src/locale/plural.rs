//! CLDR plural category resolution.
//!
//! Different languages bucket counts differently: English has "one" and
//! "other", Russian and Polish add "few" and "many". Plural rules are cached
//! per thread per language to avoid re-creating `PluralRules` instances on
//! every call.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralRuleType, PluralRules};
use serde::{Deserialize, Serialize};

/// A CLDR plural category.
///
/// The category set a locale actually uses is part of its metadata (see
/// [`LocaleData::plural_categories`](crate::LocaleData)); this enum covers
/// every category CLDR defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The CLDR name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<icu_plurals::PluralCategory> for PluralCategory {
    fn from(category: icu_plurals::PluralCategory) -> Self {
        match category {
            icu_plurals::PluralCategory::Zero => PluralCategory::Zero,
            icu_plurals::PluralCategory::One => PluralCategory::One,
            icu_plurals::PluralCategory::Two => PluralCategory::Two,
            icu_plurals::PluralCategory::Few => PluralCategory::Few,
            icu_plurals::PluralCategory::Many => PluralCategory::Many,
            icu_plurals::PluralCategory::Other => PluralCategory::Other,
        }
    }
}

/// Languages with plural rule support. Unrecognized codes fall back to
/// English rules.
const SUPPORTED_LANGUAGES: &[&str] = &["de", "en", "es", "fr", "it", "no", "pl", "ru"];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
fn normalize_lang(lang: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "no" => locale!("no"),
        "pl" => locale!("pl"),
        "ru" => locale!("ru"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// Get the CLDR plural category for a count in a given language.
///
/// Negative and zero counts are valid and map to a defined category. Rules
/// are cached per thread per language, so repeated calls with the same
/// language code reuse the previously constructed `PluralRules`.
///
/// # Examples
///
/// ```
/// use lingo::{PluralCategory, plural_category};
///
/// // English: 1 = one, everything else = other
/// assert_eq!(plural_category("en", 1), PluralCategory::One);
/// assert_eq!(plural_category("en", 2), PluralCategory::Other);
///
/// // Russian: one, few, and many
/// assert_eq!(plural_category("ru", 1), PluralCategory::One);
/// assert_eq!(plural_category("ru", 2), PluralCategory::Few);
/// assert_eq!(plural_category("ru", 5), PluralCategory::Many);
/// ```
pub fn plural_category(lang: &str, n: i64) -> PluralCategory {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return entry.1.category_for(n).into();
        }
        let rules = build_rules(lang);
        let category = rules.category_for(n).into();
        cache.push((lang, rules));
        category
    })
}

/// Select a plural form from an ordered list by count.
///
/// The locale's ordered category list maps the resolved category to a list
/// index: English `[one, other]` selects `forms[0]` for count 1 and
/// `forms[1]` otherwise. A category with no corresponding entry falls back
/// to the last available form, so short lists and out-of-range counts never
/// panic. An empty list yields the empty string.
pub fn pluralize<'a>(forms: &'a [String], count: i64, locale: &crate::Locale) -> &'a str {
    let Some(last) = forms.last() else {
        return "";
    };
    let data = locale.data();
    let category = plural_category(data.language(), count);
    match data.plural_categories.iter().position(|c| *c == category) {
        Some(index) if index < forms.len() => &forms[index],
        _ => last,
    }
}
