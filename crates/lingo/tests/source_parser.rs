//! Tests for the translation data source parser.

use lingo::{Entry, ParseError, parse_source};

// === Scalars ===

#[test]
fn bare_scalar() {
    let root = parse_source("greeting: Hello\n").unwrap();
    assert_eq!(
        root.get_path("greeting").unwrap().as_text(),
        Some("Hello")
    );
}

#[test]
fn quoted_scalar() {
    let root = parse_source(r#"greeting: "Hello, world!""#).unwrap();
    assert_eq!(
        root.get_path("greeting").unwrap().as_text(),
        Some("Hello, world!")
    );
}

#[test]
fn quoted_scalar_escapes() {
    let root = parse_source(r#"text: "a \"b\"\n\tc \\ d""#).unwrap();
    assert_eq!(
        root.get_path("text").unwrap().as_text(),
        Some("a \"b\"\n\tc \\ d")
    );
}

#[test]
fn bare_scalar_keeps_placeholders_and_punctuation() {
    let root = parse_source("greeting: Hei, %{name}!\n").unwrap();
    assert_eq!(
        root.get_path("greeting").unwrap().as_text(),
        Some("Hei, %{name}!")
    );
}

#[test]
fn bare_scalar_trailing_whitespace_trimmed() {
    let root = parse_source("key: value   \n").unwrap();
    assert_eq!(root.get_path("key").unwrap().as_text(), Some("value"));
}

// === Nesting ===

#[test]
fn nested_mappings() {
    let input = "\
user:
  name: Username
  profile:
    age: Age
";
    let root = parse_source(input).unwrap();
    assert_eq!(
        root.get_path("user.name").unwrap().as_text(),
        Some("Username")
    );
    assert_eq!(
        root.get_path("user.profile.age").unwrap().as_text(),
        Some("Age")
    );
}

#[test]
fn container_path_resolves_to_map() {
    let input = "\
user:
  name: Username
";
    let root = parse_source(input).unwrap();
    let user = root.get_path("user").unwrap();
    assert!(user.as_map().is_some());
    assert_eq!(user.leaf_keys(), vec!["name"]);
}

#[test]
fn lists_hold_ordered_forms() {
    let input = "\
messages:
  - one message
  - \"%{count} messages\"
";
    let root = parse_source(input).unwrap();
    let forms = root.get_path("messages").unwrap().as_list().unwrap();
    assert_eq!(forms, ["one message", "%{count} messages"]);
}

#[test]
fn comments_and_blank_lines_ignored() {
    let input = "\
# top comment

a: 1

  # indented comment
b: 2
";
    let root = parse_source(input).unwrap();
    assert_eq!(root.get_path("a").unwrap().as_text(), Some("1"));
    assert_eq!(root.get_path("b").unwrap().as_text(), Some("2"));
}

#[test]
fn empty_source_is_empty_mapping() {
    let root = parse_source("").unwrap();
    assert_eq!(root, Entry::empty());
    assert!(root.leaf_keys().is_empty());
}

#[test]
fn key_without_value_or_children_is_empty_mapping() {
    let root = parse_source("pending:\n").unwrap();
    assert!(root.get_path("pending").unwrap().is_empty());
}

// === Round-trip ===

#[test]
fn every_loaded_key_is_returned_unchanged() {
    let input = "\
greeting: \"Hei, %{name}!\"
user:
  name: Brukernavn
  messages:
    - \"%{count} melding\"
    - \"%{count} meldinger\"
";
    let root = parse_source(input).unwrap();
    assert_eq!(
        root.leaf_keys(),
        vec!["greeting", "user.messages", "user.name"]
    );
    assert_eq!(
        root.get_path("greeting").unwrap().as_text(),
        Some("Hei, %{name}!")
    );
    assert_eq!(
        root.get_path("user.name").unwrap().as_text(),
        Some("Brukernavn")
    );
    assert_eq!(
        root.get_path("user.messages").unwrap().as_list().unwrap(),
        ["%{count} melding", "%{count} meldinger"]
    );
}

// === Errors ===

fn position_of(err: ParseError) -> (usize, usize) {
    err.position()
}

#[test]
fn tab_indentation_rejected() {
    let err = parse_source("a:\n\tb: 1\n").unwrap_err();
    assert_eq!(position_of(err), (2, 1));
}

#[test]
fn duplicate_key_rejected() {
    let err = parse_source("a: 1\na: 2\n").unwrap_err();
    match err {
        ParseError::Syntax { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("duplicate key 'a'"), "{message}");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn top_level_list_rejected() {
    let err = parse_source("- item\n").unwrap_err();
    match err {
        ParseError::Syntax { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("mapping"), "{message}");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn stray_deeper_indent_rejected() {
    let err = parse_source("a: 1\n   b: 2\n").unwrap_err();
    match err {
        ParseError::Syntax { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("indentation"), "{message}");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn unterminated_quote_is_eof_error() {
    let err = parse_source("a: \"unterminated\n").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { line: 1, .. }));
}

#[test]
fn list_item_in_mapping_rejected() {
    let input = "\
a: 1
- item
";
    let err = parse_source(input).unwrap_err();
    match err {
        ParseError::Syntax { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("list item"), "{message}");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn mixed_list_and_mapping_rejected() {
    let input = "\
things:
  - item
  key: value
";
    assert!(parse_source(input).is_err());
}

#[test]
fn error_display_carries_location() {
    let err = parse_source("a: 1\na: 2\n").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("2:"), "{rendered}");
}
