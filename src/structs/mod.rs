//! Struct validators.
//!
//! A struct parses an unknown [`Value`](crate::Value) into a typed output or
//! returns a [`StructError`](crate::StructError). Structs are plain values:
//! build them once, share them freely (they are `Send + Sync`), and nest them
//! to describe deeper shapes.
//!
//! Validation is fail-fast. When a nested struct fails, every enclosing
//! combinator prepends its own key or index to the error's path, so the
//! caller receives a single root-to-leaf location.
//!
//! # Example
//!
//! ```rust
//! use litmus::{structs, Struct, StructExt, Value};
//! use serde_json::json;
//!
//! let order = structs::object()
//!     .field("id", structs::string())
//!     .field("status", structs::enums(["open", "closed"]))
//!     .field("items", structs::array(
//!         structs::object()
//!             .field("sku", structs::string())
//!             .field("qty", structs::number().refine("positive", |n| *n > 0.0)),
//!     ))
//!     .field("note", structs::optional(structs::string()));
//!
//! let input = Value::from(json!({
//!     "id": "A-1",
//!     "status": "open",
//!     "items": [{"sku": "x", "qty": 2}, {"sku": "y", "qty": 0}],
//! }));
//!
//! let err = order.validate(&input).unwrap_err();
//! assert_eq!(err.path.to_strings(), vec!["items", "1", "qty"]);
//! assert_eq!(err.message, "Expected a value of type 'positive'.");
//! ```

mod adapters;
mod array;
mod boolean;
mod date;
mod defaulted;
mod enums;
mod number;
mod object;
mod string;
mod traits;
mod unknown;

pub use adapters::{FromFn, MapStruct, Refine, WithMessage};
pub use array::{ArrayStruct, ListStruct};
pub use boolean::BooleanStruct;
pub use date::DateStruct;
pub use defaulted::{Defaulted, Optional};
pub use enums::{EnumsStruct, Literal};
pub use number::NumberStruct;
pub use object::ObjectStruct;
pub use string::StringStruct;
pub use traits::{Struct, StructExt, ValueValidator};
pub use unknown::UnknownStruct;

use crate::error::StructError;
use crate::value::Value;

/// Accepts strings.
pub fn string() -> StringStruct {
    StringStruct::new()
}

/// Converts any value to its string form.
pub fn as_string() -> StringStruct {
    StringStruct::coercing()
}

/// Accepts finite numbers.
pub fn number() -> NumberStruct {
    NumberStruct::new()
}

/// Converts the input to a number, then accepts it if finite.
pub fn as_number() -> NumberStruct {
    NumberStruct::coercing()
}

pub fn boolean() -> BooleanStruct {
    BooleanStruct
}

/// Accepts valid dates.
pub fn date() -> DateStruct {
    DateStruct::new()
}

/// Parses strings and reads numbers as epoch milliseconds, then accepts valid dates.
pub fn as_date() -> DateStruct {
    DateStruct::coercing()
}

/// Accepts a string or number equal to one of `values`.
pub fn enums<I, L>(values: I) -> EnumsStruct
where
    I: IntoIterator<Item = L>,
    L: Into<Literal>,
{
    EnumsStruct::new(values)
}

/// Accepts anything.
pub fn unknown() -> UnknownStruct {
    UnknownStruct
}

/// Validates every element of an array with `element`.
pub fn array<S: Struct>(element: S) -> ArrayStruct<S> {
    ArrayStruct::new(element)
}

/// Like [`array`], collecting the output into a [`List`](crate::List).
pub fn list<S: Struct>(element: S) -> ListStruct<S> {
    ListStruct::new(element)
}

/// Starts an object shape; declare fields with [`ObjectStruct::field`].
pub fn object() -> ObjectStruct {
    ObjectStruct::new()
}

/// Falls back to `default` whenever `schema` fails.
pub fn defaulted<S: Struct>(schema: S, default: S::Output) -> Defaulted<S> {
    Defaulted::new(schema, default, false)
}

/// Falls back to `default` only for `Undefined` and `Null` input.
pub fn defaulted_strict<S: Struct>(schema: S, default: S::Output) -> Defaulted<S> {
    Defaulted::new(schema, default, true)
}

/// Treats `Undefined` and `Null` as absent, validating anything else with `schema`.
pub fn optional<S: Struct>(schema: S) -> Optional<S> {
    Optional::new(schema)
}

/// Lifts a function into a struct.
///
/// ```rust
/// use litmus::{structs, Struct, StructError, Value};
///
/// let non_empty = structs::from_fn(|value: &Value| match value.as_str() {
///     Some(s) if !s.is_empty() => Ok(s.to_string()),
///     _ => Err(StructError::generic(value, "expected a non-empty string")),
/// });
/// assert!(non_empty.validate(&Value::from("")).is_err());
/// ```
pub fn from_fn<F, O>(f: F) -> FromFn<F>
where
    F: Fn(&Value) -> Result<O, StructError> + Send + Sync,
{
    FromFn::new(f)
}
