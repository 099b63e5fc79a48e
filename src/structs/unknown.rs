//! The accept-anything struct.

use crate::error::StructError;
use crate::value::Value;

use super::traits::Struct;

/// Accepts every value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownStruct;

impl Struct for UnknownStruct {
    type Output = Value;

    fn validate(&self, value: &Value) -> Result<Value, StructError> {
        Ok(value.clone())
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value)
    }
}
