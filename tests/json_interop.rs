use serde_json::json;
use treescan::json::{from_json_str, to_json_string};
use treescan::value::Value;

#[test]
fn parse_and_render_round_trip() {
    let value = from_json_str(r#"{"b": [1, 2.5, "x"], "a": null}"#).unwrap();
    assert_eq!(value.get("a"), Some(&Value::Null));
    assert_eq!(value.get("b").and_then(|b| b.index(1)), Some(&Value::Number(2.5)));
    // keys render sorted
    assert_eq!(to_json_string(&value), r#"{"a":null,"b":[1,2.5,"x"]}"#);
}

#[test]
fn integral_numbers_render_without_a_decimal_point() {
    assert_eq!(to_json_string(&Value::Number(3.0)), "3");
    assert_eq!(to_json_string(&Value::Number(3.5)), "3.5");
    assert_eq!(Value::Number(-7.0).to_string(), "-7");
}

#[test]
fn non_finite_numbers_render_as_null() {
    assert_eq!(to_json_string(&Value::Number(f64::NAN)), "null");
    assert_eq!(to_json_string(&Value::Number(f64::INFINITY)), "null");
}

#[test]
fn invalid_json_is_an_error() {
    assert!(from_json_str("{not json").is_err());
}

#[test]
fn conversion_matches_direct_construction() {
    let via_json = Value::from(json!({"k": [true, 1]}));
    let direct = Value::object([(
        "k",
        Value::array([Value::Bool(true), Value::Number(1.0)]),
    )]);
    assert_eq!(via_json, direct);
}

#[test]
fn nan_is_never_equal_to_itself() {
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    let a = Value::array([Value::Number(f64::NAN)]);
    assert_ne!(a.clone(), a);
}
