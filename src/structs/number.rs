//! Number validation.

use crate::coerce;
use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

const NOT_A_NUMBER: &str = "The broader type is 'number' but the narrower type is 'NaN'.";

/// Accepts finite numbers.
///
/// `NaN` and the infinities are numbers by type, so they fail with a
/// validation error rather than an assignment error. The coercing variant,
/// built by [`as_number`](super::as_number), converts the input first.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, ErrorKind, Struct, Value};
///
/// assert_eq!(structs::number().validate(&Value::from(2.5)), Ok(2.5));
///
/// let err = structs::number().validate(&Value::from(f64::NAN)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Validation);
///
/// assert_eq!(structs::as_number().validate(&Value::from(" 0x10 ")), Ok(16.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberStruct {
    coerce: bool,
}

impl NumberStruct {
    pub fn new() -> Self {
        Self { coerce: false }
    }

    pub(crate) fn coercing() -> Self {
        Self { coerce: true }
    }

    fn check(value: &Value) -> Result<f64, StructError> {
        match value {
            Value::Number(n) if n.is_finite() => Ok(*n),
            Value::Number(_) => Err(StructError::validation(value, NOT_A_NUMBER)),
            other => Err(StructError::assignment(other, "number")),
        }
    }
}

impl Struct for NumberStruct {
    type Output = f64;

    fn validate(&self, value: &Value) -> Result<f64, StructError> {
        if self.coerce {
            Self::check(&Value::Number(coerce::to_number(value)))
        } else {
            Self::check(value)
        }
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_accepts_finite_numbers() {
        for n in [0.0, -0.5, 1e300, f64::MIN_POSITIVE] {
            assert_eq!(NumberStruct::new().validate(&Value::from(n)), Ok(n));
        }
    }

    #[test]
    fn test_non_finite_is_a_validation_error() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = NumberStruct::new().validate(&Value::from(n)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.message, NOT_A_NUMBER);
        }
    }

    #[test]
    fn test_wrong_type_is_an_assignment_error() {
        let err = NumberStruct::new().validate(&Value::from("1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Assignment);
        assert_eq!(err.actual(), Some("string"));

        let err = NumberStruct::new().validate(&Value::BigInt(1)).unwrap_err();
        assert_eq!(err.actual(), Some("bigint"));
    }

    #[test]
    fn test_coercion() {
        let n = NumberStruct::coercing();
        assert_eq!(n.validate(&Value::from("42")), Ok(42.0));
        assert_eq!(n.validate(&Value::from("")), Ok(0.0));
        assert_eq!(n.validate(&Value::Null), Ok(0.0));
        assert_eq!(n.validate(&Value::from(true)), Ok(1.0));
        assert_eq!(n.validate(&Value::from("1e3")), Ok(1000.0));

        assert_eq!(
            n.validate(&Value::from("0x+1F")).unwrap_err().kind(),
            ErrorKind::Validation
        );

        let err = n.validate(&Value::from("not-a-number")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(err.input, Value::Number(x) if x.is_nan()));

        assert_eq!(
            n.validate(&Value::Undefined).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }
}
