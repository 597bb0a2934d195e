//! Translation data sources and the per-locale load/merge step.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::parser::parse_source;
use crate::types::Entry;

/// A provider of translation data.
///
/// Any implementation can replace the default file-based source: the
/// contract is the pair of operations below, nothing more. Implementations
/// must return the same data for the same code on every call; the library
/// treats loaded entries as immutable.
pub trait Source {
    /// Locale codes this source has data for.
    fn available(&self) -> Vec<String>;

    /// Load the entry tree for one locale code. `Ok(None)` means the source
    /// simply has no data for that code, which is never an error.
    fn load(&self, code: &str) -> Result<Option<Entry>, LoadError>;
}

/// The default file-based source: one `<code>.lingo` file per locale under
/// a base directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
    extension: String,
}

impl FileSource {
    /// Create a source over a directory of `.lingo` files.
    pub fn new(base_dir: impl AsRef<Path>) -> FileSource {
        FileSource {
            base_dir: base_dir.as_ref().to_path_buf(),
            extension: "lingo".to_string(),
        }
    }

    /// Use a different file extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> FileSource {
        self.extension = extension.into();
        self
    }

    /// The directory this source reads from.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.base_dir.join(format!("{code}.{}", self.extension))
    }
}

impl Source for FileSource {
    fn available(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.base_dir.display(), error = %e, "cannot list translation directory");
                return Vec::new();
            }
        };
        let mut codes: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_lowercase)
            })
            .collect();
        codes.sort();
        codes
    }

    fn load(&self, code: &str) -> Result<Option<Entry>, LoadError> {
        let path = self.path_for(code);
        if !path.exists() {
            debug!(path = %path.display(), "no translation file, skipping");
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let entry = parse_source(&content).map_err(|e| LoadError::parse(&path, &e))?;
        debug!(path = %path.display(), keys = entry.leaf_keys().len(), "loaded translation file");
        Ok(Some(entry))
    }
}

/// Load one locale from a prioritized list of sources.
///
/// Sources are consulted in order and deep-merged per key: an entry loaded
/// from an earlier source is never overridden by a later one, at any depth.
/// Sources with no data for the code are skipped. Returns `None` when no
/// source had anything.
pub fn load_locale(
    code: &str,
    sources: &[&dyn Source],
) -> Result<Option<Entry>, LoadError> {
    let mut merged: Option<Entry> = None;
    for source in sources {
        let Some(entry) = source.load(code)? else {
            continue;
        };
        match &mut merged {
            None => merged = Some(entry),
            Some(existing) => existing.merge_missing(entry),
        }
    }
    if let Some(entry) = &merged {
        debug!(locale = code, keys = entry.leaf_keys().len(), "merged translation data");
    }
    Ok(merged)
}
