//! End-to-end tests for the I18n facade.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use lingo::{FileSource, I18n, Value, params};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// An app translation directory with Norwegian and English data.
fn app_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "no.lingo",
        "\
greeting: \"Hei, %{name}!\"
messages:
  - \"%{count} melding\"
  - \"%{count} meldinger\"
user:
  name: Brukernavn
",
    );
    write_file(
        dir.path(),
        "en.lingo",
        "\
greeting: \"Hi, %{name}!\"
farewell: Goodbye
messages:
  - \"%{count} message\"
  - \"%{count} messages\"
user:
  name: Username
  title: Title
",
    );
    dir
}

fn i18n_for(locales: &[&str], dir: &TempDir) -> I18n {
    let mut i18n = I18n::new(locales);
    i18n.load_source(&FileSource::new(dir.path())).unwrap();
    i18n
}

// === Context basics ===

#[test]
fn active_locale_is_first_supported_request() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.locale().code(), "no");
    assert_eq!(i18n.chain(), &["no", "en"]);
}

#[test]
fn unsupported_request_keeps_its_code() {
    let dir = app_dir();
    let i18n = i18n_for(&["tlh"], &dir);
    assert_eq!(i18n.locale().code(), "tlh");
    assert!(!i18n.locale().is_supported());
    // Formatting falls back to default-locale rules.
    assert_eq!(i18n.l(&Value::Number(1234)), "1,234");
}

#[test]
fn available_locales_reflect_loaded_data() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.available_locales(), vec!["en", "no"]);
}

// === Translation ===

#[test]
fn translates_in_preferred_locale() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.t_with("greeting", &params! { "name" => "Bo" }), "Hei, Bo!");
    assert_eq!(i18n.t("user.name"), "Brukernavn");
}

#[test]
fn falls_back_along_the_chain() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    // "farewell" exists only in English.
    assert_eq!(i18n.t("farewell"), "Goodbye");
}

#[test]
fn missing_key_renders_visible_placeholder() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.t("nope.nothing"), "[missing: nope.nothing]");
}

#[test]
fn container_key_renders_subtree_marker() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.t("user"), "[subtree: user]");
}

#[test]
fn structured_lookup_exposes_subtrees() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    let lookup = i18n.translate("user");
    let map = lookup.entry().unwrap().as_map().unwrap();
    assert!(map.contains_key("name"));
}

#[test]
fn same_query_always_yields_same_output() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    let p = params! { "name" => "Bo" };
    let first = i18n.t_with("greeting", &p);
    let second = i18n.t_with("greeting", &p);
    assert_eq!(first, second);
}

// === Pluralization ===

#[test]
fn count_selects_plural_form() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.t_with("messages", &params! { "count" => 1 }), "1 melding");
    assert_eq!(i18n.t_with("messages", &params! { "count" => 5 }), "5 meldinger");
    assert_eq!(i18n.t_with("messages", &params! { "count" => 0 }), "0 meldinger");
}

#[test]
fn plural_without_count_defaults_to_one() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.t("messages"), "%{count} melding");
}

// === Extensions ===

#[test]
fn extensions_fill_gaps_but_never_override() {
    let app = TempDir::new().unwrap();
    let ext = TempDir::new().unwrap();
    write_file(app.path(), "en.lingo", "greeting: app wins\n");
    write_file(
        ext.path(),
        "en.lingo",
        "\
greeting: extension loses
extra: extension adds this
",
    );

    let mut i18n = I18n::new(&["en"]);
    i18n.load_source(&FileSource::new(app.path())).unwrap();
    i18n.load_extension(&FileSource::new(ext.path())).unwrap();

    assert_eq!(i18n.t("greeting"), "app wins");
    assert_eq!(i18n.t("extra"), "extension adds this");
}

#[test]
fn extension_locale_absent_from_app_still_usable() {
    let app = TempDir::new().unwrap();
    let ext = TempDir::new().unwrap();
    write_file(app.path(), "en.lingo", "greeting: Hello\n");
    write_file(ext.path(), "no.lingo", "greeting: Hei\n");

    let mut i18n = I18n::new(&["no", "en"]);
    i18n.load_source(&FileSource::new(app.path())).unwrap();
    i18n.load_extension(&FileSource::new(ext.path())).unwrap();

    // Norwegian comes entirely from the extension.
    assert_eq!(i18n.t("greeting"), "Hei");
}

// === Filters ===

#[test]
fn filtered_translation() {
    let dir = app_dir();
    let i18n = i18n_for(&["en"], &dir);
    assert_eq!(
        i18n.t_filtered("farewell", &params! {}, &["upcase"]),
        "GOODBYE"
    );
}

#[test]
fn custom_filter_on_context() {
    let dir = app_dir();
    let mut i18n = i18n_for(&["en"], &dir);
    i18n.filters_mut().register("shout", |text, _| format!("{text}!"));
    assert_eq!(
        i18n.t_filtered("farewell", &params! {}, &["shout"]),
        "Goodbye!"
    );
}

// === Locale-formatted values ===

#[test]
fn localizes_numbers_and_dates() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    assert_eq!(i18n.l(&Value::Number(1234567)), "1 234 567");
    let date = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    assert_eq!(i18n.l(&Value::Date(date)), "31.01.2020");
}

#[test]
fn explicit_pattern_overrides_locale_default() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    assert_eq!(
        i18n.l_format(&Value::Date(date), "%A %-d. %B"),
        "Onsdag 1. januar"
    );
    // Non-date values ignore the pattern.
    assert_eq!(i18n.l_format(&Value::Number(7), "%Y"), "7");
}

// === Coverage ===

#[test]
fn validate_reports_missing_keys() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    let gaps = i18n.validate("en", "no");
    let keys: Vec<&str> = gaps.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["farewell", "user.title"]);
    assert!(gaps.iter().all(|g| g.locale == "no"));

    assert!(i18n.validate("no", "en").is_empty());
}

#[test]
fn missing_key_suggestions_surface_in_lookup() {
    let dir = app_dir();
    let i18n = i18n_for(&["no", "en"], &dir);
    let lingo::Lookup::Missing(missing) = i18n.translate("greetings") else {
        panic!("expected missing lookup");
    };
    assert!(
        missing.suggestions().contains(&"greeting".to_string()),
        "suggestions: {:?}",
        missing.suggestions()
    );
}
