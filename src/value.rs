//! Dynamic values inspected by guards and structs.
//!
//! [`Value`] models the runtime values a loosely-typed host hands to this
//! library: the seven primitives, arrays, plain objects, and the handful of
//! built-in object kinds (dates, regular expressions, functions, class
//! instances) that guards need to tell apart from plain objects.
//!
//! # Example
//!
//! ```rust
//! use litmus::Value;
//! use serde_json::json;
//!
//! let value = Value::from(json!({"name": "Alice", "tags": ["a", "b"]}));
//! assert_eq!(value.type_tag(), "object");
//! assert_eq!(value.get("name"), &Value::from("Alice"));
//! assert_eq!(value.get("missing"), &Value::Undefined);
//! ```

use std::fmt::{self, Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;

use crate::coerce;

/// An insertion-ordered property map, the backing store of plain objects.
pub type Object = IndexMap<String, Value>;

/// Largest distance from the epoch, in milliseconds, a date may represent.
const MAX_TIME_MS: f64 = 8.64e15;

static UNDEFINED: Value = Value::Undefined;
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A dynamically-typed value.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The intentional empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number, including `NaN` and the infinities.
    Number(f64),
    /// An arbitrary-precision integer, bounded here to `i128`.
    BigInt(i128),
    /// A string.
    String(String),
    /// A unique symbol.
    Symbol(Symbol),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A plain object with no prototype beyond the base object.
    Object(Object),
    /// A date, which may hold an invalid timestamp.
    Date(Date),
    /// A regular expression.
    RegExp(Regex),
    /// A callable.
    Function(Function),
    /// An instance of a named class.
    Instance(Instance),
}

impl Value {
    /// Returns the canonical lowercase type tag of this value.
    ///
    /// Class instances report `object`; every other built-in kind has its own tag.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) | Value::Instance(_) => "object",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
            Value::Function(_) => "function",
        }
    }

    /// Reads a property, yielding `Undefined` when it does not exist.
    ///
    /// Only plain objects and class instances carry properties.
    pub fn get(&self, key: &str) -> &Value {
        let property = match self {
            Value::Object(map) => map.get(key),
            Value::Instance(instance) => instance.properties.get(key),
            _ => None,
        };
        property.unwrap_or(&UNDEFINED)
    }

    /// Normalizes a possibly-nil value: `Null` and `Undefined` become `None`.
    ///
    /// Falsy values such as `0`, `""` and `false` are present.
    pub fn into_option(self) -> Option<Value> {
        match self {
            Value::Undefined | Value::Null => None,
            value => Some(value),
        }
    }

    /// Borrowing form of [`Value::into_option`].
    pub fn present(&self) -> Option<&Value> {
        match self {
            Value::Undefined | Value::Null => None,
            value => Some(value),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&coerce::to_js_string(self))
    }
}

/// A unique symbol. Two symbols are equal only if one is a clone of the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Creates a fresh symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(description.into()),
        }
    }

    /// Creates a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// A point in time, or an invalid date.
///
/// Invalid dates come out of failed parses and out-of-range timestamps;
/// their time value is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(Option<DateTime<Utc>>);

impl Date {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        Self(Some(datetime))
    }

    pub fn invalid() -> Self {
        Self(None)
    }

    /// Creates a date from milliseconds since the epoch.
    ///
    /// The fractional part is truncated. Non-finite values and values beyond
    /// ±8.64e15 produce an invalid date.
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_TIME_MS {
            return Self::invalid();
        }
        Self(DateTime::from_timestamp_millis(millis.trunc() as i64))
    }

    /// Parses a date string.
    ///
    /// Accepts RFC 3339 and RFC 2822 timestamps, `YYYY`, `YYYY-MM`,
    /// `YYYY-MM-DD`, and date-times without an offset, which are read as UTC.
    /// Anything else yields an invalid date.
    pub fn parse(input: &str) -> Self {
        let s = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::new(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Self::new(dt.with_timezone(&Utc));
        }
        for format in [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Self::new(naive.and_utc());
            }
        }

        let day = match s.len() {
            4 if s.bytes().all(|b| b.is_ascii_digit()) => format!("{s}-01-01"),
            7 if s.as_bytes()[4] == b'-' => format!("{s}-01"),
            _ => s.to_string(),
        };
        NaiveDate::parse_from_str(&day, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map_or_else(Self::invalid, |naive| Self::new(naive.and_utc()))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Milliseconds since the epoch, or `NaN` for an invalid date.
    pub fn time(&self) -> f64 {
        self.0.map_or(f64::NAN, |dt| dt.timestamp_millis() as f64)
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Formats as `YYYY-MM-DDTHH:mm:ss.sssZ`, or `None` for an invalid date.
    pub fn to_iso_string(&self) -> Option<String> {
        self.0
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(
                f,
                "{}",
                dt.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            ),
            None => f.write_str("Invalid Date"),
        }
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime)
    }
}

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named native callable.
#[derive(Clone)]
pub struct Function {
    name: String,
    body: Arc<NativeFn>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

/// An instance of a named class: object-shaped, but not a plain object.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: String,
    properties: Object,
}

impl Instance {
    pub fn new(class: impl Into<String>, properties: Object) -> Self {
        Self {
            class: class.into(),
            properties,
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn properties(&self) -> &Object {
        &self.properties
    }
}

/// Errors converting a [`Value`] into JSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The value has no JSON representation at all.
    #[error("value of type '{0}' cannot be represented in JSON")]
    Unrepresentable(&'static str),
    /// A bigint does not fit in a 64-bit JSON number.
    #[error("bigint {0} does not fit in a JSON number")]
    BigIntOutOfRange(i128),
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ConversionError;

    /// Converts following JSON serialization rules: non-finite numbers and
    /// invalid dates become `null`, dates become ISO strings, and
    /// `undefined`, functions and symbols are skipped inside objects and
    /// written as `null` inside arrays.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        Ok(match value {
            Value::Undefined | Value::Function(_) | Value::Symbol(_) => {
                return Err(ConversionError::Unrepresentable(value.type_tag()))
            }
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::BigInt(i) => {
                if let Ok(n) = i64::try_from(*i) {
                    Json::from(n)
                } else if let Ok(n) = u64::try_from(*i) {
                    Json::from(n)
                } else {
                    return Err(ConversionError::BigIntOutOfRange(*i));
                }
            }
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Undefined | Value::Function(_) | Value::Symbol(_) => Ok(Json::Null),
                        item => Json::try_from(item),
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => object_to_json(map)?,
            Value::Instance(instance) => object_to_json(&instance.properties)?,
            Value::Date(date) => date.to_iso_string().map_or(Json::Null, Json::String),
            Value::RegExp(_) => Json::Object(serde_json::Map::new()),
        })
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

fn object_to_json(map: &Object) -> Result<serde_json::Value, ConversionError> {
    let mut out = serde_json::Map::new();
    for (key, value) in map {
        if matches!(
            value,
            Value::Undefined | Value::Function(_) | Value::Symbol(_)
        ) {
            continue;
        }
        out.insert(key.clone(), serde_json::Value::try_from(value)?);
    }
    Ok(serde_json::Value::Object(out))
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Value::Date(date)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(datetime: DateTime<Utc>) -> Self {
        Value::Date(Date::new(datetime))
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Value::RegExp(regex)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

/// `None` maps to `Undefined`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Undefined, Into::into)
    }
}

// Values are shared across threads by validators and errors.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Value>();
    assert_sync::<Value>();
};
