//! Loose conversions between dynamic values.
//!
//! These follow the host platform's standard coercion rules (the ones behind
//! `Number(x)`, `String(x)` and `new Date(x)`) and back the coercing structs
//! [`as_number`](crate::structs::as_number), [`as_string`](crate::structs::as_string)
//! and [`as_date`](crate::structs::as_date).

use std::sync::OnceLock;

use regex::Regex;

use crate::value::{Date, Value};

fn decimal_literal() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("decimal literal pattern")
    })
}

/// Converts a value to a number.
///
/// Symbols coerce to `NaN` rather than failing.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::BigInt(i) => *i as f64,
        Value::String(s) => string_to_number(s),
        Value::Date(date) => date.time(),
        Value::Array(_) => string_to_number(&to_js_string(value)),
        Value::Symbol(_)
        | Value::Object(_)
        | Value::Instance(_)
        | Value::RegExp(_)
        | Value::Function(_) => f64::NAN,
    }
}

/// Parses a string as a numeric literal.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Decimal,
/// `0x`/`0o`/`0b` and `Infinity` literals are recognized; anything else is
/// `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }

    if decimal_literal().is_match(s) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Formats a number the way the host platform prints it.
///
/// Integral values print without a fractional part, very large and very
/// small magnitudes use exponent notation (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    format!("{n}")
}

/// Converts a value to its string form.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::BigInt(i) => i.to_string(),
        Value::String(s) => s.clone(),
        Value::Symbol(symbol) => symbol.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Undefined | Value::Null => String::new(),
                item => to_js_string(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) | Value::Instance(_) => "[object Object]".to_string(),
        Value::Date(date) => date.to_string(),
        Value::RegExp(regex) => format!("/{}/", regex.as_str()),
        Value::Function(function) => {
            format!("function {}() {{ [native code] }}", function.name())
        }
    }
}

/// Converts strings and numbers into dates; other values pass through unchanged.
pub fn to_date(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::Date(Date::parse(s)),
        Value::Number(n) => Value::Date(Date::from_millis(*n)),
        other => other.clone(),
    }
}
