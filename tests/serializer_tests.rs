use serde::Serialize;
use std::collections::BTreeMap;
use string_grammar::{to_string, to_string_with_options, value, EmitOptions, Error, Value};

#[derive(Serialize)]
struct Capture {
    name: String,
}

#[derive(Serialize)]
enum Shape {
    Point,
    Line(i32),
}

#[test]
fn test_mapping_with_sequence() {
    let doc = value!({"a": 1, "b": [1, 2, 3]});
    assert_eq!(to_string(&doc).unwrap(), "a: 1\nb:\n  - 1\n  - 2\n  - 3");
}

#[test]
fn test_colon_inside_string_stays_bare() {
    assert_eq!(to_string("hello: world").unwrap(), "hello: world");
}

#[test]
fn test_leading_dash_is_single_quoted() {
    assert_eq!(to_string("-dash").unwrap(), "'-dash'");
}

#[test]
fn test_single_quote_doubling() {
    assert_eq!(to_string("'tis").unwrap(), "'''tis'");
    assert_eq!(to_string("trailing ").unwrap(), "'trailing '");
    assert_eq!(to_string("label:").unwrap(), "'label:'");
}

#[test]
fn test_empty_string_renders_bare() {
    assert_eq!(to_string("").unwrap(), "");
    assert_eq!(to_string(&value!({"k": ""})).unwrap(), "k: ");
    assert_eq!(to_string(&value!(["", "x"])).unwrap(), "- \n- x");
}

#[test]
fn test_double_quoted_escapes() {
    assert_eq!(to_string("a\tb").unwrap(), r#""a\tb""#);
    assert_eq!(to_string("\"quoted\"").unwrap(), r#""\"quoted\"""#);
    assert_eq!(to_string("cr\r").unwrap(), r#""cr\r""#);
}

#[test]
fn test_literal_block() {
    assert_eq!(to_string("line one\nline two").unwrap(), "|\n  line one\n  line two");
    assert_eq!(
        to_string(&value!(["x\ny"])).unwrap(),
        "- |\n  x\n  y"
    );
}

#[test]
fn test_primitives() {
    assert_eq!(to_string(&42).unwrap(), "42");
    assert_eq!(to_string(&-1.5).unwrap(), "-1.5");
    assert_eq!(to_string(&2.0).unwrap(), "2");
    assert_eq!(to_string(&true).unwrap(), "true");
    assert_eq!(to_string(&()).unwrap(), "null");
    assert_eq!(to_string(&None::<i32>).unwrap(), "null");
}

#[test]
fn test_empty_collections() {
    assert_eq!(to_string(&value!([])).unwrap(), "[]");
    assert_eq!(to_string(&value!({})).unwrap(), "{}");
    assert_eq!(to_string(&value!({"list": []})).unwrap(), "list:\n  []");
}

#[test]
fn test_nested_sequences() {
    let doc = value!([[1, 2], [3]]);
    assert_eq!(to_string(&doc).unwrap(), "- - 1\n  - 2\n- - 3");
}

#[test]
fn test_sequence_with_null_stays_compact() {
    let doc = value!([1, null, "x"]);
    assert_eq!(to_string(&doc).unwrap(), "- 1\n- null\n- x");
}

#[test]
fn test_numeric_keys_render_inline() {
    let mut captures = BTreeMap::new();
    captures.insert(
        1u32,
        Capture {
            name: "storage".to_string(),
        },
    );
    captures.insert(
        2u32,
        Capture {
            name: "#punct".to_string(),
        },
    );

    assert_eq!(
        to_string(&captures).unwrap(),
        "1: {name: storage}\n2: {name: '#punct'}"
    );
}

#[test]
fn test_numeric_key_with_nested_inline_values() {
    let doc = value!({"0": {"list": [1, [2, 3]], "flag": false}});
    assert_eq!(
        to_string(&doc).unwrap(),
        "0: {list: [1, [2, 3]], flag: false}"
    );
}

#[test]
fn test_deep_nesting_indentation() {
    let doc = value!({
        "outer": {
            "middle": [
                {"leaf": "a", "items": [1, 2]}
            ]
        }
    });

    let expected = "outer:\n  middle:\n    - leaf: a\n      items:\n        - 1\n        - 2";
    assert_eq!(to_string(&doc).unwrap(), expected);
}

#[test]
fn test_blank_lines_are_not_indented() {
    let doc = value!({"text": "a\n\nb"});
    assert_eq!(to_string(&doc).unwrap(), "text:\n  |\n    a\n\n    b");
}

#[test]
fn test_trailing_newline_option() {
    let options = EmitOptions::new().with_trailing_newline(true);
    assert_eq!(to_string_with_options(&value!({"a": 1}), options).unwrap(), "a: 1\n");
}

#[test]
fn test_unit_variant_is_a_string() {
    assert_eq!(to_string(&Shape::Point).unwrap(), "Point");
}

#[test]
fn test_unsupported_value_kinds() {
    let err = to_string(&Shape::Line(3)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue(_)));
    assert!(err.to_string().starts_with("unsupported value kind"));

    let mut by_sequence = BTreeMap::new();
    by_sequence.insert(vec![1], "v");
    assert!(matches!(
        to_string(&by_sequence),
        Err(Error::UnsupportedValue(_))
    ));
}

#[test]
fn test_value_round_trips_through_serde_bridge() {
    let doc = value!({"a": [1, {"b": null}], "c": "d"});
    assert_eq!(string_grammar::to_value(&doc).unwrap(), doc);
    assert_eq!(Value::from("d"), value!("d"));
}
