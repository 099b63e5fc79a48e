//! Validation against a fixed set of literals.

use std::fmt::{self, Display};

use crate::coerce;
use crate::error::StructError;
use crate::guards::{is_number, is_string};
use crate::value::Value;

use super::traits::Struct;

/// A string or number literal accepted by [`EnumsStruct`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(f64),
}

impl Literal {
    fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Str(expected), Value::String(actual)) => expected == actual,
            (Literal::Num(expected), Value::Number(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Num(n) => f.write_str(&coerce::format_number(*n)),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Num(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Num(f64::from(n))
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Str(s) => Value::String(s),
            Literal::Num(n) => Value::Number(n),
        }
    }
}

/// Accepts a string or finite number equal to one of the declared literals.
///
/// `NaN` and the infinities are not numbers here, so they fail with an
/// assignment error.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, ErrorKind, Literal, Struct, Value};
///
/// let color = structs::enums(["red", "green"]);
/// assert_eq!(color.validate(&Value::from("red")), Ok(Literal::from("red")));
///
/// let err = color.validate(&Value::from("blue")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert_eq!(err.message, "Expecting one of red | green");
/// ```
#[derive(Debug, Clone)]
pub struct EnumsStruct {
    values: Vec<Literal>,
}

impl EnumsStruct {
    pub fn new<I, L>(values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[Literal] {
        &self.values
    }

    fn expecting(&self) -> String {
        let values: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        format!("Expecting one of {}", values.join(" | "))
    }
}

impl Struct for EnumsStruct {
    type Output = Literal;

    fn validate(&self, value: &Value) -> Result<Literal, StructError> {
        match value {
            v if is_string(v) || is_number(v) => self
                .values
                .iter()
                .find(|literal| literal.matches(value))
                .cloned()
                .ok_or_else(|| StructError::validation(value, self.expecting())),
            other => Err(StructError::assignment(other, "string | number")),
        }
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Value::from)
    }
}
