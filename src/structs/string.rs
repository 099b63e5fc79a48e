//! String validation.

use crate::coerce;
use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

/// Accepts strings.
///
/// The coercing variant, built by [`as_string`](super::as_string), first
/// converts any input to its string form and therefore never fails.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
///
/// assert_eq!(structs::string().validate(&Value::from("hi")), Ok("hi".to_string()));
/// assert!(structs::string().validate(&Value::from(1)).is_err());
/// assert_eq!(structs::as_string().validate(&Value::from(1.5)), Ok("1.5".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringStruct {
    coerce: bool,
}

impl StringStruct {
    pub fn new() -> Self {
        Self { coerce: false }
    }

    pub(crate) fn coercing() -> Self {
        Self { coerce: true }
    }
}

impl Struct for StringStruct {
    type Output = String;

    fn validate(&self, value: &Value) -> Result<String, StructError> {
        if self.coerce {
            return Ok(coerce::to_js_string(value));
        }

        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(StructError::assignment(other, "string")),
        }
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Value::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::value::Date;

    #[test]
    fn test_accepts_strings_unchanged() {
        assert_eq!(StringStruct::new().validate(&Value::from("")), Ok(String::new()));
        assert_eq!(StringStruct::new().validate(&Value::from("hello")), Ok("hello".into()));
    }

    #[test]
    fn test_rejects_other_types() {
        let err = StringStruct::new().validate(&Value::Null).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Assignment);
        assert_eq!(err.expected(), Some("string"));
        assert_eq!(err.actual(), Some("null"));
        assert_eq!(err.message, "Type 'null' is not assignable to type 'string'.");
        assert_eq!(err.input, Value::Null);
    }

    #[test]
    fn test_coercion() {
        let s = StringStruct::coercing();
        assert_eq!(s.validate(&Value::Undefined), Ok("undefined".into()));
        assert_eq!(s.validate(&Value::Null), Ok("null".into()));
        assert_eq!(s.validate(&Value::from(true)), Ok("true".into()));
        assert_eq!(s.validate(&Value::from(42)), Ok("42".into()));
        assert_eq!(
            s.validate(&Value::from(2f64.powi(60))),
            Ok("1152921504606847000".into())
        );
        assert_eq!(s.validate(&Value::from(vec![1, 2])), Ok("1,2".into()));
        assert_eq!(
            s.validate(&Value::Object(Default::default())),
            Ok("[object Object]".into())
        );
        assert_eq!(s.validate(&Value::Date(Date::invalid())), Ok("Invalid Date".into()));
    }
}
