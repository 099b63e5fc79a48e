//! Integration tests for the type guards.

use chrono::Utc;
use litmus::{
    is_array, is_bigint, is_boolean, is_date, is_function, is_nil, is_null, is_number, is_object,
    is_present, is_primitive, is_regexp, is_string, is_symbol, is_undefined, Date, Function,
    Instance, Object, Symbol, Value,
};
use regex::Regex;
use serde_json::json;

fn samples() -> Vec<(&'static str, Value)> {
    vec![
        ("undefined", Value::Undefined),
        ("null", Value::Null),
        ("boolean", Value::from(true)),
        ("number", Value::from(1.5)),
        ("nan", Value::from(f64::NAN)),
        ("bigint", Value::BigInt(9)),
        ("string", Value::from("")),
        ("symbol", Value::from(Symbol::anonymous())),
        ("array", Value::from(json!([]))),
        ("object", Value::from(json!({}))),
        ("date", Value::from(Utc::now())),
        ("invalid_date", Value::Date(Date::invalid())),
        ("regexp", Value::from(Regex::new("a+").unwrap())),
        ("function", Value::from(Function::new("noop", |_| Value::Undefined))),
        ("instance", Value::from(Instance::new("User", Object::new()))),
    ]
}

fn accepted_by(guard: fn(&Value) -> bool) -> Vec<&'static str> {
    samples()
        .into_iter()
        .filter(|(_, value)| guard(value))
        .map(|(name, _)| name)
        .collect()
}

#[test]
fn test_single_kind_guards() {
    assert_eq!(accepted_by(is_string), vec!["string"]);
    assert_eq!(accepted_by(is_number), vec!["number"]);
    assert_eq!(accepted_by(is_boolean), vec!["boolean"]);
    assert_eq!(accepted_by(is_bigint), vec!["bigint"]);
    assert_eq!(accepted_by(is_symbol), vec!["symbol"]);
    assert_eq!(accepted_by(is_undefined), vec!["undefined"]);
    assert_eq!(accepted_by(is_null), vec!["null"]);
    assert_eq!(accepted_by(is_array), vec!["array"]);
    assert_eq!(accepted_by(is_date), vec!["date"]);
    assert_eq!(accepted_by(is_regexp), vec!["regexp"]);
    assert_eq!(accepted_by(is_function), vec!["function"]);
}

#[test]
fn test_is_object_accepts_plain_objects_only() {
    assert_eq!(accepted_by(is_object), vec!["object"]);
}

#[test]
fn test_nil_and_present_partition_every_value() {
    assert_eq!(accepted_by(is_nil), vec!["undefined", "null"]);
    for (_, value) in samples() {
        assert_ne!(is_nil(&value), is_present(&value));
    }
}

#[test]
fn test_is_primitive() {
    assert_eq!(
        accepted_by(is_primitive),
        vec!["undefined", "null", "boolean", "number", "bigint", "string", "symbol"]
    );
}
