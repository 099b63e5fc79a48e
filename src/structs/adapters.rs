//! Adapters that wrap an existing struct.

use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

/// Overrides the message of every error produced by the inner struct.
///
/// Created by [`StructExt::error`](super::StructExt::error).
pub struct WithMessage<S> {
    inner: S,
    message: String,
}

impl<S> WithMessage<S> {
    pub(crate) fn new(inner: S, message: String) -> Self {
        Self { inner, message }
    }
}

impl<S: Struct> Struct for WithMessage<S> {
    type Output = S::Output;

    fn validate(&self, value: &Value) -> Result<S::Output, StructError> {
        self.inner
            .validate(value)
            .map_err(|e| e.with_message(self.message.clone()))
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.inner
            .validate_to_value(value)
            .map_err(|e| e.with_message(self.message.clone()))
    }
}

/// Transforms the output of the inner struct.
///
/// Created by [`StructExt::map`](super::StructExt::map).
pub struct MapStruct<S, F> {
    inner: S,
    f: F,
}

impl<S, F> MapStruct<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, O> Struct for MapStruct<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> O + Send + Sync,
    O: Into<Value>,
{
    type Output = O;

    fn validate(&self, value: &Value) -> Result<O, StructError> {
        self.inner.validate(value).map(&self.f)
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Into::into)
    }
}

/// Checks a predicate on the output of the inner struct.
///
/// Created by [`StructExt::refine`](super::StructExt::refine).
pub struct Refine<S, F> {
    inner: S,
    name: String,
    predicate: F,
}

impl<S, F> Refine<S, F> {
    pub(crate) fn new(inner: S, name: String, predicate: F) -> Self {
        Self {
            inner,
            name,
            predicate,
        }
    }
}

impl<S, F> Struct for Refine<S, F>
where
    S: Struct,
    S::Output: Into<Value>,
    F: Fn(&S::Output) -> bool + Send + Sync,
{
    type Output = S::Output;

    fn validate(&self, value: &Value) -> Result<S::Output, StructError> {
        let output = self.inner.validate(value)?;
        if (self.predicate)(&output) {
            Ok(output)
        } else {
            Err(StructError::generic(
                value,
                format!("Expected a value of type '{}'.", self.name),
            ))
        }
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Into::into)
    }
}

/// A struct backed by a plain function.
///
/// Created by [`from_fn`](super::from_fn).
pub struct FromFn<F> {
    f: F,
}

impl<F> FromFn<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, O> Struct for FromFn<F>
where
    F: Fn(&Value) -> Result<O, StructError> + Send + Sync,
    O: Into<Value>,
{
    type Output = O;

    fn validate(&self, value: &Value) -> Result<O, StructError> {
        (self.f)(value)
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Into::into)
    }
}
