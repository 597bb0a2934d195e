//! Loaded translation trees and fallback lookup.

use std::collections::BTreeMap;

use crate::types::{Entry, Lookup, Untranslated};

/// Loaded translation data, one entry tree per locale code.
///
/// Trees are filled once by the loader and read-only afterwards, so lookup
/// is pure: identical (key, chain) input always yields identical output.
#[derive(Debug, Default)]
pub struct TranslationTree {
    roots: BTreeMap<String, Entry>,
}

impl TranslationTree {
    /// Create an empty tree.
    pub fn new() -> TranslationTree {
        TranslationTree::default()
    }

    /// Insert the root entry for a locale, replacing any previous data for
    /// that code.
    pub fn insert(&mut self, code: impl Into<String>, root: Entry) {
        self.roots.insert(code.into(), root);
    }

    /// Merge an entry tree into a locale's data without overriding
    /// anything already loaded: earlier data wins per key, later data only
    /// fills gaps.
    pub fn merge(&mut self, code: &str, root: Entry) {
        match self.roots.get_mut(code) {
            Some(existing) => existing.merge_missing(root),
            None => {
                self.roots.insert(code.to_string(), root);
            }
        }
    }

    /// The root entry for one locale, if loaded.
    pub fn root(&self, code: &str) -> Option<&Entry> {
        self.roots.get(code)
    }

    /// Locale codes with loaded data, sorted.
    pub fn locales(&self) -> Vec<&str> {
        self.roots.keys().map(String::as_str).collect()
    }

    /// Whether any data is loaded.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Look up a key path in one locale's data. Empty values are treated as
    /// absent so a later locale in the chain can supply them.
    pub fn lookup_in(&self, code: &str, key: &str) -> Option<&Entry> {
        let entry = self.roots.get(code)?.get_path(key)?;
        if entry.is_empty() { None } else { Some(entry) }
    }

    /// Resolve a key path against a fallback chain.
    ///
    /// Walks the chain in preference order and returns the first non-empty
    /// value: a leaf (text or plural forms) or a sub-tree when the path
    /// addresses a container. A total miss yields an [`Untranslated`]
    /// marker carrying the key and nearby known keys.
    pub fn translate<'a>(&'a self, key: &str, chain: &'a [String]) -> Lookup<'a> {
        for code in chain {
            if let Some(entry) = self.lookup_in(code, key) {
                return Lookup::Found {
                    entry,
                    locale: code,
                };
            }
        }
        Lookup::Missing(Untranslated::new(key, self.suggestions_for(key, chain)))
    }

    /// Leaf key paths loaded for one locale, sorted. Containers are not
    /// counted.
    pub fn leaf_keys(&self, code: &str) -> Vec<String> {
        self.roots
            .get(code)
            .map(Entry::leaf_keys)
            .unwrap_or_default()
    }

    /// Nearby known keys for a missed lookup, best match first.
    fn suggestions_for(&self, key: &str, chain: &[String]) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        for code in chain {
            for candidate in self.leaf_keys(code) {
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }
        compute_suggestions(key, &candidates)
    }
}

/// Minimum Jaro-Winkler similarity for a key to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Maximum number of suggestions attached to a marker.
const SUGGESTION_LIMIT: usize = 3;

/// Rank candidate keys by similarity to the requested one.
pub fn compute_suggestions(key: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(key, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(SUGGESTION_LIMIT)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
