//! Tests for `%{name}` interpolation and named filters.

use chrono::NaiveDate;
use lingo::{FilterRegistry, Locale, Value, interpolate, params};

fn en() -> Locale {
    Locale::resolve(&["en"])
}

// === Interpolation ===

#[test]
fn substitutes_named_parameter() {
    let out = interpolate("Hi %{name}", &params! { "name" => "Bo" }, &en());
    assert_eq!(out, "Hi Bo");
}

#[test]
fn unmatched_placeholder_left_verbatim() {
    let out = interpolate("Hi %{missing}", &params! {}, &en());
    assert_eq!(out, "Hi %{missing}");
}

#[test]
fn multiple_placeholders() {
    let out = interpolate(
        "%{greeting}, %{name}! %{greeting} again.",
        &params! { "greeting" => "Hi", "name" => "Bo" },
        &en(),
    );
    assert_eq!(out, "Hi, Bo! Hi again.");
}

#[test]
fn escaped_placeholder_renders_literally() {
    let out = interpolate("100%%{sure}", &params! { "sure" => "yes" }, &en());
    assert_eq!(out, "100%{sure}");
}

#[test]
fn unterminated_placeholder_left_verbatim() {
    let out = interpolate("Hi %{name", &params! { "name" => "Bo" }, &en());
    assert_eq!(out, "Hi %{name");
}

#[test]
fn number_parameter_formatted_with_locale_separators() {
    let out = interpolate("%{n} users", &params! { "n" => 1234567 }, &en());
    assert_eq!(out, "1,234,567 users");

    let no = Locale::resolve(&["no"]);
    let out = interpolate("%{n} brukere", &params! { "n" => 1234567 }, &no);
    assert_eq!(out, "1 234 567 brukere");
}

#[test]
fn date_parameter_formatted_with_locale_pattern() {
    let date = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    let out = interpolate("due %{when}", &params! { "when" => date }, &en());
    assert_eq!(out, "due 01/31/2020");

    let no = Locale::resolve(&["no"]);
    let out = interpolate("frist %{when}", &params! { "when" => date }, &no);
    assert_eq!(out, "frist 31.01.2020");
}

#[test]
fn float_parameter_keeps_natural_precision() {
    let de = Locale::resolve(&["de"]);
    let out = interpolate("%{x}", &params! { "x" => 3.25 }, &de);
    assert_eq!(out, "3,25");
}

#[test]
fn placeholders_without_valid_names_left_verbatim() {
    let out = interpolate("a %{} b %{bad name} c", &params! {}, &en());
    assert_eq!(out, "a %{} b %{bad name} c");
}

// === Filters ===

#[test]
fn capitalize_uppercases_first_grapheme() {
    let filters = FilterRegistry::new();
    let no = Locale::resolve(&["no"]);
    assert_eq!(
        filters.apply("capitalize", "øst for sola".to_string(), &no),
        "Øst for sola"
    );
}

#[test]
fn upcase_and_downcase() {
    let filters = FilterRegistry::new();
    let en = en();
    assert_eq!(filters.apply("upcase", "hello".to_string(), &en), "HELLO");
    assert_eq!(filters.apply("downcase", "HeLLo".to_string(), &en), "hello");
}

#[test]
fn unknown_filter_leaves_input_unchanged() {
    let filters = FilterRegistry::new();
    assert_eq!(
        filters.apply("reverse", "abc".to_string(), &en()),
        "abc"
    );
    assert!(!filters.has("reverse"));
}

#[test]
fn custom_filter_registration() {
    let mut filters = FilterRegistry::new();
    filters.register("shout", |text, _locale| format!("{text}!"));
    assert_eq!(filters.apply("shout", "hei".to_string(), &en()), "hei!");
}

#[test]
fn registered_filter_shadows_builtin() {
    let mut filters = FilterRegistry::new();
    filters.register("upcase", |text, _locale| text);
    assert_eq!(filters.apply("upcase", "quiet".to_string(), &en()), "quiet");
}
