//! Traits for struct polymorphism.
//!
//! [`Struct`] is implemented by every validator so that different structs
//! (string, number, object, ...) can be nested inside one another, and
//! [`StructExt`] adds the adapters every struct gets for free.

use crate::error::StructError;
use crate::value::Value;

use super::adapters::{MapStruct, Refine, WithMessage};

/// A validator that parses an unknown [`Value`] into a typed output.
///
/// Validation is pure and synchronous: it never mutates its input and
/// returns on the first failure. The `Send + Sync` bounds allow structs to
/// be shared across threads and stored as `Box<dyn ValueValidator>`.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
/// use serde_json::json;
///
/// let user = structs::object()
///     .field("name", structs::string())
///     .field("age", structs::number());
///
/// let output = user.validate(&Value::from(json!({"name": "Ada", "age": 36}))).unwrap();
/// assert_eq!(output["name"], Value::from("Ada"));
/// ```
pub trait Struct: Send + Sync {
    /// The output type produced by successful validation.
    type Output;

    /// Validates a value against this struct.
    fn validate(&self, value: &Value) -> Result<Self::Output, StructError>;

    /// Validates a value and returns the output as a [`Value`].
    ///
    /// This lets structs with different output types be used uniformly as
    /// object fields, where every output is stored as a `Value`.
    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError>;
}

/// A type-erased validator producing [`Value`] output.
///
/// Any [`Struct`] is a `ValueValidator`, so heterogeneous structs can share a
/// collection:
///
/// ```rust
/// use litmus::{structs, ValueValidator};
///
/// let validators: Vec<Box<dyn ValueValidator>> = vec![
///     Box::new(structs::string()),
///     Box::new(structs::number()),
/// ];
/// assert_eq!(validators.len(), 2);
/// ```
pub trait ValueValidator: Send + Sync {
    fn validate_value(&self, value: &Value) -> Result<Value, StructError>;
}

impl<S: Struct> ValueValidator for S {
    fn validate_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate_to_value(value)
    }
}

/// Adapters available on every [`Struct`].
pub trait StructExt: Struct + Sized {
    /// Replaces the message of any error this struct produces.
    ///
    /// Kind and path are left untouched.
    ///
    /// ```rust
    /// use litmus::{structs, Struct, StructExt, Value};
    ///
    /// let age = structs::number().error("age must be a number");
    /// let err = age.validate(&Value::from("old")).unwrap_err();
    /// assert_eq!(err.message, "age must be a number");
    /// ```
    fn error(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message.into())
    }

    /// Transforms the output of a successful validation.
    fn map<O, F>(self, f: F) -> MapStruct<Self, F>
    where
        F: Fn(Self::Output) -> O + Send + Sync,
        O: Into<Value>,
    {
        MapStruct::new(self, f)
    }

    /// Adds a predicate on the output; a failing predicate yields a generic
    /// error naming `name`.
    ///
    /// ```rust
    /// use litmus::{structs, ErrorKind, Struct, StructExt, Value};
    ///
    /// let positive = structs::number().refine("positive", |n| *n > 0.0);
    /// assert_eq!(positive.validate(&Value::from(3)), Ok(3.0));
    ///
    /// let err = positive.validate(&Value::from(-1)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Generic);
    /// assert_eq!(err.message, "Expected a value of type 'positive'.");
    /// ```
    fn refine<F>(self, name: impl Into<String>, predicate: F) -> Refine<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync,
    {
        Refine::new(self, name.into(), predicate)
    }
}

impl<S: Struct> StructExt for S {}
