//! # Litmus
//!
//! Runtime type checks and validation for dynamic, JavaScript-shaped values.
//!
//! ## Overview
//!
//! Litmus turns untrusted input into typed data. A [`Value`] models whatever
//! arrived at runtime; type guards answer quick questions about it, and
//! structs parse it into precise Rust types, stopping at the first problem
//! and reporting exactly where it is.
//!
//! ## Core Types
//!
//! - [`Value`]: A dynamic value (`undefined`, `null`, numbers, strings, arrays, objects, dates, ...)
//! - [`Struct`]: A validator from `&Value` to a typed output; build them with [`structs`]
//! - [`StructError`]: The failure a struct returns, with its [`ErrorKind`] and [`StructPath`]
//! - [`List`]: An owned sequence with a fluent API
//! - [`OptionExt`] / [`ResultExt`]: Exhaustive dispatch on `Option` and `Result`
//!
//! ## Example
//!
//! ```rust
//! use litmus::{is_string, structs, ErrorKind, Struct, Value};
//! use serde_json::json;
//!
//! let user = structs::object()
//!     .field("name", structs::string())
//!     .field("born", structs::as_date());
//!
//! let input = Value::from(json!({"name": "Ada", "born": "1815-12-10"}));
//! assert!(is_string(input.get("name")));
//!
//! let parsed = user.validate(&input).unwrap();
//! assert_eq!(parsed["name"], Value::from("Ada"));
//!
//! let err = user.validate(&Value::from(json!({"name": 7}))).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Assignment);
//! assert_eq!(err.to_string(), "name: Type 'number' is not assignable to type 'string'.");
//! ```

pub mod coerce;
pub mod error;
pub mod guards;
pub mod iterable;
pub mod number;
pub mod path;
pub mod primitives;
pub mod structs;
pub mod value;

pub use error::{Cause, ErrorKind, StructError};
pub use guards::*;
pub use path::{PathSegment, StructPath};
pub use primitives::{List, OptionExt, OptionPattern, ResultExt, ResultPattern};
pub use structs::{Literal, Struct, StructExt, ValueValidator};
pub use value::{ConversionError, Date, Function, Instance, Object, Symbol, Value};

/// Type alias for the result of a struct validation.
pub type StructResult<T> = Result<T, StructError>;
