//! Boolean validation.

use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanStruct;

impl Struct for BooleanStruct {
    type Output = bool;

    fn validate(&self, value: &Value) -> Result<bool, StructError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(StructError::assignment(other, "boolean")),
        }
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Value::Bool)
    }
}
