//! Tests for translation sources and the per-locale load/merge step.

use std::fs;
use std::path::Path;

use lingo::{Entry, FileSource, LoadError, Source, load_locale};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

// === FileSource ===

#[test]
fn available_lists_locale_codes() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "en.lingo", "a: 1\n");
    write_file(dir.path(), "no.lingo", "a: 1\n");
    write_file(dir.path(), "notes.txt", "not a translation file\n");

    let source = FileSource::new(dir.path());
    assert_eq!(source.available(), vec!["en", "no"]);
}

#[test]
fn load_reads_and_parses_a_locale_file() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "no.lingo", "greeting: Hei\n");

    let source = FileSource::new(dir.path());
    let entry = source.load("no").unwrap().unwrap();
    assert_eq!(entry.get_path("greeting").unwrap().as_text(), Some("Hei"));
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let source = FileSource::new(dir.path());
    assert!(source.load("fr").unwrap().is_none());
}

#[test]
fn malformed_file_is_a_load_failure_with_location() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "en.lingo", "a: 1\na: 2\n");

    let source = FileSource::new(dir.path());
    let err = source.load("en").unwrap_err();
    match err {
        LoadError::Parse { path, line, message, .. } => {
            assert!(path.ends_with("en.lingo"));
            assert_eq!(line, 2);
            assert!(message.contains("duplicate key"), "{message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn custom_extension() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "en.tr", "a: 1\n");

    let source = FileSource::new(dir.path()).with_extension("tr");
    assert_eq!(source.available(), vec!["en"]);
    assert!(source.load("en").unwrap().is_some());
}

#[test]
fn unreadable_directory_has_no_available_locales() {
    let source = FileSource::new("/nonexistent/translations");
    assert!(source.available().is_empty());
}

// === Merging across sources ===

#[test]
fn earlier_source_wins_per_key() {
    let app_dir = TempDir::new().unwrap();
    let ext_dir = TempDir::new().unwrap();
    write_file(
        app_dir.path(),
        "en.lingo",
        "\
greeting: app greeting
shared:
  title: app title
",
    );
    write_file(
        ext_dir.path(),
        "en.lingo",
        "\
greeting: extension greeting
farewell: extension farewell
shared:
  title: extension title
  subtitle: extension subtitle
",
    );

    let app = FileSource::new(app_dir.path());
    let ext = FileSource::new(ext_dir.path());
    let merged = load_locale("en", &[&app, &ext]).unwrap().unwrap();

    // App entries survive, extension entries only fill gaps - per key,
    // at any depth.
    assert_eq!(
        merged.get_path("greeting").unwrap().as_text(),
        Some("app greeting")
    );
    assert_eq!(
        merged.get_path("farewell").unwrap().as_text(),
        Some("extension farewell")
    );
    assert_eq!(
        merged.get_path("shared.title").unwrap().as_text(),
        Some("app title")
    );
    assert_eq!(
        merged.get_path("shared.subtitle").unwrap().as_text(),
        Some("extension subtitle")
    );
}

#[test]
fn no_source_data_yields_none() {
    let dir = TempDir::new().unwrap();
    let source = FileSource::new(dir.path());
    assert!(load_locale("de", &[&source]).unwrap().is_none());
}

#[test]
fn single_source_loads_unmerged() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "de.lingo", "a: eins\n");
    let source = FileSource::new(dir.path());
    let merged = load_locale("de", &[&source]).unwrap().unwrap();
    assert_eq!(merged.get_path("a").unwrap().as_text(), Some("eins"));
}

// === Custom sources ===

struct StaticSource(&'static str);

impl Source for StaticSource {
    fn available(&self) -> Vec<String> {
        vec!["en".to_string()]
    }

    fn load(&self, code: &str) -> Result<Option<Entry>, LoadError> {
        if code == "en" {
            Ok(Some(lingo::parse_source(self.0).expect("static data parses")))
        } else {
            Ok(None)
        }
    }
}

#[test]
fn any_source_implementation_can_replace_files() {
    let source = StaticSource("greeting: Hello from memory\n");
    let merged = load_locale("en", &[&source]).unwrap().unwrap();
    assert_eq!(
        merged.get_path("greeting").unwrap().as_text(),
        Some("Hello from memory")
    );
}
