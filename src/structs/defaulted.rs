//! Fallback combinators: defaults and optional values.

use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

/// Substitutes a default value for failed input.
///
/// With [`defaulted`](super::defaulted) every failure, including a
/// wrong-typed or invalid input, is replaced by the default. With
/// [`defaulted_strict`](super::defaulted_strict) only `Undefined` and `Null`
/// inputs fall back; other failures propagate.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
///
/// let port = structs::defaulted(structs::number(), 8080.0);
/// assert_eq!(port.validate(&Value::Undefined), Ok(8080.0));
/// assert_eq!(port.validate(&Value::from("x")), Ok(8080.0));
/// assert_eq!(port.validate(&Value::from(3000)), Ok(3000.0));
///
/// let strict = structs::defaulted_strict(structs::number(), 8080.0);
/// assert_eq!(strict.validate(&Value::Null), Ok(8080.0));
/// assert!(strict.validate(&Value::from("x")).is_err());
/// ```
pub struct Defaulted<S: Struct> {
    inner: S,
    default: S::Output,
    only_missing: bool,
}

impl<S: Struct> Defaulted<S> {
    pub(crate) fn new(inner: S, default: S::Output, only_missing: bool) -> Self {
        Self {
            inner,
            default,
            only_missing,
        }
    }

    fn fallback(&self, value: &Value, error: StructError) -> Result<S::Output, StructError>
    where
        S::Output: Clone,
    {
        if self.only_missing && !matches!(value, Value::Undefined | Value::Null) {
            return Err(error);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %error.kind(), path = %error.path, "substituting default value");
        #[cfg(not(feature = "tracing"))]
        let _ = error;

        Ok(self.default.clone())
    }
}

impl<S> Struct for Defaulted<S>
where
    S: Struct,
    S::Output: Clone + Into<Value> + Send + Sync,
{
    type Output = S::Output;

    fn validate(&self, value: &Value) -> Result<S::Output, StructError> {
        self.inner
            .validate(value)
            .or_else(|e| self.fallback(value, e))
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Into::into)
    }
}

/// Accepts `Undefined` and `Null` as absent and validates anything else.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
///
/// let nickname = structs::optional(structs::string());
/// assert_eq!(nickname.validate(&Value::Null), Ok(None));
/// assert_eq!(nickname.validate(&Value::from("ada")), Ok(Some("ada".to_string())));
/// assert!(nickname.validate(&Value::from(1)).is_err());
/// ```
pub struct Optional<S> {
    inner: S,
}

impl<S: Struct> Optional<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Struct> Struct for Optional<S> {
    type Output = Option<S::Output>;

    fn validate(&self, value: &Value) -> Result<Self::Output, StructError> {
        value
            .present()
            .map(|present| self.inner.validate(present))
            .transpose()
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        match value.present() {
            Some(present) => self.inner.validate_to_value(present),
            None => Ok(Value::Undefined),
        }
    }
}
