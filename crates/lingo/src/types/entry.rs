use std::collections::BTreeMap;

/// A translation entry: the value stored at one dotted key path.
///
/// Entries form a tree. Leaves are either plain text or an ordered list of
/// strings (plural forms); interior nodes are nested mappings. Entries are
/// built once by the loader and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A literal string value.
    Text(String),

    /// An ordered list of strings. Lists hold plural forms, one per plural
    /// category of the locale, in the locale's category order.
    List(Vec<String>),

    /// A nested mapping from key segment to child entry.
    Map(BTreeMap<String, Entry>),
}

impl Entry {
    /// An empty mapping, the starting point for merges.
    pub fn empty() -> Entry {
        Entry::Map(BTreeMap::new())
    }

    /// Get this entry as text, if it is a leaf string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this entry as a list of forms, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Entry::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get this entry as a nested mapping, if it is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Entry>> {
        match self {
            Entry::Map(map) => Some(map),
            _ => None,
        }
    }

    /// True for entries that carry no usable content. Empty entries are
    /// skipped during lookup so a later locale in the chain can supply the
    /// value.
    pub fn is_empty(&self) -> bool {
        match self {
            Entry::Text(s) => s.is_empty(),
            Entry::List(items) => items.is_empty(),
            Entry::Map(map) => map.is_empty(),
        }
    }

    /// Descend a dot-separated key path from this entry.
    ///
    /// An empty path resolves to the entry itself. Returns `None` as soon as
    /// a segment is missing or the path tries to descend through a leaf.
    pub fn get_path(&self, path: &str) -> Option<&Entry> {
        if path.is_empty() {
            return Some(self);
        }
        let mut current = self;
        for segment in path.split('.') {
            match current {
                Entry::Map(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Merge `other` into this entry without overriding anything already
    /// present: existing leaves are kept, missing subkeys are filled, and
    /// nested mappings are merged recursively. Later sources therefore only
    /// ever add keys earlier sources did not provide.
    pub fn merge_missing(&mut self, other: Entry) {
        let (Entry::Map(map), Entry::Map(other_map)) = (self, other) else {
            return;
        };
        for (key, value) in other_map {
            match map.get_mut(&key) {
                None => {
                    map.insert(key, value);
                }
                Some(existing @ Entry::Map(_)) => existing.merge_missing(value),
                Some(_) => {}
            }
        }
    }

    /// Collect every leaf key path reachable from this entry, in sorted
    /// order. Used for coverage reporting and missing-key suggestions.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Entry::Text(_) | Entry::List(_) => {
                if !prefix.is_empty() {
                    out.push(prefix.to_string());
                }
            }
            Entry::Map(map) => {
                for (key, value) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    value.collect_leaf_keys(&path, out);
                }
            }
        }
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Text(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Text(s)
    }
}
