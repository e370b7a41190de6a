//! Conversion of host data into [`Value`].
//!
//! Each `#[case]` is isolated, no shared state.

use fastache_core::{parse_data, DataFormat, Value};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("string", json!("x"), "string")]
#[case("integer", json!(7), "integer")]
#[case("negative", json!(-7), "integer")]
#[case("u64 max", json!(18446744073709551615u64), "integer")]
#[case("float", json!(0.5), "float")]
#[case("boolean", json!(true), "boolean")]
#[case("array", json!([1, "a"]), "sequence")]
#[case("object", json!({"k": 1}), "mapping")]
#[case("null", json!(null), "absent")]
fn json_variants_map_to_value_variants(
    #[case] label: &str,
    #[case] input: serde_json::Value,
    #[case] type_name: &str,
) {
    let value = Value::from(input);
    assert_eq!(value.type_name(), type_name, "[{label}] type name");
}

#[rstest]
#[case(DataFormat::Json, r#"{"a": {"b": {"c": "deep"}}}"#)]
#[case(DataFormat::Yaml, "a:\n  b:\n    c: deep\n")]
fn nested_mappings_survive_parsing(#[case] format: DataFormat, #[case] text: &str) {
    let value = parse_data(text, format).expect("parse");
    let deep = value
        .get("a")
        .and_then(|a| a.get("b"))
        .and_then(|b| b.get("c"));
    assert_eq!(deep, Some(&Value::from("deep")));
}

#[test]
fn unicode_keys_and_values_are_preserved() {
    let value = Value::from(json!({ "アプリ": "проект-项目" }));
    assert_eq!(value.get("アプリ"), Some(&Value::from("проект-项目")));
}

#[rstest]
#[case(DataFormat::Json, r#"{"n": 18446744073709551615}"#)]
#[case(DataFormat::Yaml, "n: 18446744073709551615\n")]
fn large_unsigned_integers_are_not_rounded(#[case] format: DataFormat, #[case] text: &str) {
    let value = parse_data(text, format).expect("parse");
    assert_eq!(value.get("n"), Some(&Value::Unsigned(u64::MAX)));
}
