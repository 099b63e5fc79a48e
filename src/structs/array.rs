//! Array and list validation.

use crate::error::StructError;
use crate::primitives::List;
use crate::value::Value;

use super::traits::Struct;

/// Validates every element of an array with one element struct.
///
/// Elements are checked in order and validation stops at the first failure,
/// whose path gets the element's index prepended.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
/// use serde_json::json;
///
/// let numbers = structs::array(structs::number());
/// assert_eq!(numbers.validate(&Value::from(json!([1, 2]))), Ok(vec![1.0, 2.0]));
///
/// let err = numbers.validate(&Value::from(json!([1, 2, "x"]))).unwrap_err();
/// assert_eq!(err.path.to_strings(), vec!["2"]);
/// ```
pub struct ArrayStruct<S> {
    element: S,
}

impl<S: Struct> ArrayStruct<S> {
    pub fn new(element: S) -> Self {
        Self { element }
    }

    fn each<O>(
        &self,
        value: &Value,
        mut check: impl FnMut(&Value) -> Result<O, StructError>,
    ) -> Result<Vec<O>, StructError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(StructError::assignment(other, "array")),
        };

        let mut validated = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match check(item) {
                Ok(output) => validated.push(output),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(index, path = %e.path, "array element failed validation");
                    return Err(e.at_index(index));
                }
            }
        }
        Ok(validated)
    }
}

impl<S: Struct> Struct for ArrayStruct<S> {
    type Output = Vec<S::Output>;

    fn validate(&self, value: &Value) -> Result<Self::Output, StructError> {
        self.each(value, |item| self.element.validate(item))
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.each(value, |item| self.element.validate_to_value(item))
            .map(Value::Array)
    }
}

/// Like [`ArrayStruct`], with the output collected into a [`List`].
pub struct ListStruct<S> {
    array: ArrayStruct<S>,
}

impl<S: Struct> ListStruct<S> {
    pub fn new(element: S) -> Self {
        Self {
            array: ArrayStruct::new(element),
        }
    }
}

impl<S: Struct> Struct for ListStruct<S> {
    type Output = List<S::Output>;

    fn validate(&self, value: &Value) -> Result<Self::Output, StructError> {
        self.array.validate(value).map(List::from)
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.array.validate_to_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::structs::{number, string};
    use serde_json::json;

    #[test]
    fn test_validates_every_element() {
        let s = ArrayStruct::new(string());
        let out = s.validate(&Value::from(json!(["a", "b"]))).unwrap();
        assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(s.validate(&Value::from(json!([]))), Ok(vec![]));
    }

    #[test]
    fn test_non_array_is_an_assignment_error() {
        let err = ArrayStruct::new(number())
            .validate(&Value::from(json!({"0": 1})))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Assignment);
        assert_eq!(err.expected(), Some("array"));
        assert!(err.path.is_root());
    }

    #[test]
    fn test_fails_fast_at_first_bad_element() {
        let err = ArrayStruct::new(number())
            .validate(&Value::from(json!([1, "x", null])))
            .unwrap_err();
        assert_eq!(err.path.to_strings(), vec!["1"]);
        assert_eq!(err.input, Value::from("x"));
    }

    #[test]
    fn test_list_output() {
        let out = ListStruct::new(number())
            .validate(&Value::from(json!([3, 1])))
            .unwrap();
        assert_eq!(out.to_array(), vec![3.0, 1.0]);

        let err = ListStruct::new(number())
            .validate(&Value::from(json!([3, true])))
            .unwrap_err();
        assert_eq!(err.path.to_strings(), vec!["1"]);
    }
}
