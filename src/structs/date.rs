//! Date validation.

use chrono::{DateTime, Utc};

use crate::coerce;
use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

const INVALID_DATE: &str = "The broader type is 'date' but it is actually invalid.";

/// Accepts valid dates.
///
/// An invalid date is still a date, so it fails with a validation error.
/// The coercing variant, built by [`as_date`](super::as_date), parses strings
/// and reads numbers as epoch milliseconds; anything else is checked as is.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
///
/// let parsed = structs::as_date().validate(&Value::from("2024-01-01")).unwrap();
/// assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
///
/// assert!(structs::date().validate(&Value::from("2024-01-01")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DateStruct {
    coerce: bool,
}

impl DateStruct {
    pub fn new() -> Self {
        Self { coerce: false }
    }

    pub(crate) fn coercing() -> Self {
        Self { coerce: true }
    }

    fn check(value: &Value) -> Result<DateTime<Utc>, StructError> {
        match value {
            Value::Date(date) => date
                .as_datetime()
                .ok_or_else(|| StructError::validation(value, INVALID_DATE)),
            other => Err(StructError::assignment(other, "date")),
        }
    }
}

impl Struct for DateStruct {
    type Output = DateTime<Utc>;

    fn validate(&self, value: &Value) -> Result<DateTime<Utc>, StructError> {
        if self.coerce {
            Self::check(&coerce::to_date(value))
        } else {
            Self::check(value)
        }
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Value::from)
    }
}
