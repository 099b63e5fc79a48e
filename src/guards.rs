//! Runtime type guards.
//!
//! Each guard answers one question about the runtime shape of a [`Value`].
//! Structs use them to decide between an assignment error and a narrower
//! check.

use crate::value::Value;

/// Returns true for strings.
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns true for finite numbers. `NaN` and the infinities are not numbers here.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Returns true for `Null` or `Undefined`.
pub fn is_nil(value: &Value) -> bool {
    is_null(value) || is_undefined(value)
}

/// Returns true for anything but `Null` and `Undefined`.
pub fn is_present(value: &Value) -> bool {
    !is_nil(value)
}

/// Returns true for any of the seven primitives: string, number, boolean,
/// bigint, symbol, null and undefined.
///
/// Numbers are judged by [`is_number`], so `NaN` and the infinities are not
/// primitives here.
pub fn is_primitive(value: &Value) -> bool {
    is_string(value)
        || is_number(value)
        || is_boolean(value)
        || is_bigint(value)
        || is_symbol(value)
        || is_nil(value)
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns true for plain objects only.
///
/// Arrays, functions, dates, regular expressions and class instances are
/// object-shaped but rejected.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns true for valid dates. An invalid date is not a date here.
pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(date) if date.is_valid())
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Date, Function, Instance, Object, Symbol};
    use regex::Regex;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(1.5),
            Value::from(f64::NAN),
            Value::BigInt(10),
            Value::from("s"),
            Value::from(Symbol::new("s")),
            Value::from(json!([1, 2])),
            Value::from(json!({"a": 1})),
            Value::from(Date::parse("2024-01-01")),
            Value::from(Date::invalid()),
            Value::from(Regex::new("a").unwrap()),
            Value::from(Function::new("f", |_| Value::Undefined)),
            Value::from(Instance::new("Point", Object::new())),
        ]
    }

    fn matching(guard: fn(&Value) -> bool) -> Vec<&'static str> {
        samples()
            .iter()
            .filter(|value| guard(value))
            .map(|value| value.type_tag())
            .collect()
    }

    #[test]
    fn test_is_number_rejects_nan() {
        assert!(is_number(&Value::from(0)));
        assert!(!is_number(&Value::from(f64::NAN)));
        assert!(!is_number(&Value::from(f64::INFINITY)));
        assert!(!is_number(&Value::from("1")));
    }

    #[test]
    fn test_non_finite_numbers_are_not_primitives() {
        assert!(is_primitive(&Value::from(0)));
        assert!(!is_primitive(&Value::from(f64::NAN)));
        assert!(!is_primitive(&Value::from(f64::INFINITY)));
        assert!(!is_primitive(&Value::from(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_nil_and_present() {
        assert!(is_nil(&Value::Null));
        assert!(is_nil(&Value::Undefined));
        assert!(!is_nil(&Value::from(0)));
        assert!(is_present(&Value::from("")));
        assert!(!is_present(&Value::Undefined));
    }

    #[test]
    fn test_primitive_count() {
        assert_eq!(
            matching(is_primitive),
            vec![
                "undefined",
                "null",
                "boolean",
                "number",
                "bigint",
                "string",
                "symbol"
            ]
        );
    }

    #[test]
    fn test_is_object_only_accepts_plain_objects() {
        assert_eq!(matching(is_object), vec!["object"]);
        assert!(is_object(&Value::from(json!({}))));
        assert!(!is_object(&Value::from(Instance::new("Point", Object::new()))));
        assert!(!is_object(&Value::from(json!([]))));
    }

    #[test]
    fn test_is_date_rejects_invalid_dates() {
        assert_eq!(matching(is_date), vec!["date"]);
    }

    #[test]
    fn test_single_kind_guards() {
        assert_eq!(matching(is_string), vec!["string"]);
        assert_eq!(matching(is_boolean), vec!["boolean"]);
        assert_eq!(matching(is_bigint), vec!["bigint"]);
        assert_eq!(matching(is_symbol), vec!["symbol"]);
        assert_eq!(matching(is_array), vec!["array"]);
        assert_eq!(matching(is_function), vec!["function"]);
        assert_eq!(matching(is_regexp), vec!["regexp"]);
        assert_eq!(matching(is_null), vec!["null"]);
        assert_eq!(matching(is_undefined), vec!["undefined"]);
    }
}
