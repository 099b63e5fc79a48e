//! Object validation.

use indexmap::IndexMap;

use crate::error::StructError;
use crate::value::{Object, Value};

use super::traits::{Struct, ValueValidator};

/// A struct validating plain objects against a declared shape.
///
/// Fields are validated in declaration order and validation stops at the
/// first failure, whose path gets the field name prepended. A missing
/// property is validated as `Undefined`. The output holds the declared
/// fields only; extra input properties are dropped.
///
/// Only [`Value::Object`] counts as a plain object: arrays, dates, regular
/// expressions, functions and class instances are rejected.
///
/// # Example
///
/// ```rust
/// use litmus::{structs, Struct, Value};
/// use serde_json::json;
///
/// let point = structs::object()
///     .field("x", structs::number())
///     .field("y", structs::number());
///
/// let out = point
///     .validate(&Value::from(json!({"x": 1, "y": 2, "z": 3})))
///     .unwrap();
/// assert_eq!(out.keys().collect::<Vec<_>>(), vec!["x", "y"]);
///
/// let err = point.validate(&Value::from(json!({"x": 1}))).unwrap_err();
/// assert_eq!(err.path.to_strings(), vec!["y"]);
/// ```
pub struct ObjectStruct {
    fields: IndexMap<String, Box<dyn ValueValidator>>,
}

impl ObjectStruct {
    /// Creates an object struct with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a field.
    ///
    /// Declaring a name twice replaces the earlier struct but keeps its
    /// original position.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: Struct + 'static,
    {
        self.fields.insert(name.into(), Box::new(schema));
        self
    }

    /// Declared field names, in validation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Default for ObjectStruct {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for ObjectStruct {
    type Output = Object;

    fn validate(&self, value: &Value) -> Result<Object, StructError> {
        if !matches!(value, Value::Object(_)) {
            return Err(StructError::assignment(value, "object"));
        }

        let mut validated = Object::with_capacity(self.fields.len());
        for (name, schema) in &self.fields {
            match schema.validate_value(value.get(name)) {
                Ok(v) => {
                    validated.insert(name.clone(), v);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(field = %name, path = %e.path, "object field failed validation");
                    return Err(e.at_field(name.clone()));
                }
            }
        }
        Ok(validated)
    }

    fn validate_to_value(&self, value: &Value) -> Result<Value, StructError> {
        self.validate(value).map(Value::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::structs::{array, number, optional, string, unknown};
    use crate::value::{Date, Instance};
    use serde_json::json;

    #[test]
    fn test_empty_shape_accepts_any_object() {
        let out = ObjectStruct::new()
            .validate(&Value::from(json!({"a": 1})))
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_non_plain_objects() {
        let shape = ObjectStruct::new();
        let rejected = [
            Value::Null,
            Value::from(json!([])),
            Value::Date(Date::invalid()),
            Value::from(Instance::new("Point", Object::new())),
        ];
        for value in rejected {
            let err = shape.validate(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Assignment);
            assert_eq!(err.expected(), Some("object"));
        }
    }

    #[test]
    fn test_output_keeps_declared_fields_in_order() {
        let shape = ObjectStruct::new()
            .field("b", string())
            .field("a", number());
        let out = shape
            .validate(&Value::from(json!({"a": 1, "extra": true, "b": "x"})))
            .unwrap();

        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(out["a"], Value::Number(1.0));
        assert_eq!(out["b"], Value::from("x"));
    }

    #[test]
    fn test_missing_field_reads_as_undefined() {
        let shape = ObjectStruct::new().field("name", string());
        let err = shape.validate(&Value::from(json!({}))).unwrap_err();
        assert_eq!(err.path.to_strings(), vec!["name"]);
        assert_eq!(err.actual(), Some("undefined"));

        let out = ObjectStruct::new()
            .field("nick", optional(string()))
            .field("meta", unknown())
            .validate(&Value::from(json!({})))
            .unwrap();
        assert_eq!(out["nick"], Value::Undefined);
        assert_eq!(out["meta"], Value::Undefined);
    }

    #[test]
    fn test_first_failing_field_wins() {
        let shape = ObjectStruct::new()
            .field("a", string())
            .field("b", string());
        let err = shape.validate(&Value::from(json!({"a": 1, "b": 2}))).unwrap_err();
        assert_eq!(err.path.to_strings(), vec!["a"]);
    }

    #[test]
    fn test_nested_paths_compose() {
        let shape = ObjectStruct::new().field(
            "items",
            array(ObjectStruct::new().field("n", number())),
        );
        let err = shape
            .validate(&Value::from(json!({"items": [{"n": 1}, {"n": "x"}]})))
            .unwrap_err();
        assert_eq!(err.path.to_strings(), vec!["items", "1", "n"]);
        assert_eq!(err.to_string(), "items[1].n: Type 'string' is not assignable to type 'number'.");
    }

    #[test]
    fn test_redeclared_field_keeps_position() {
        let shape = ObjectStruct::new()
            .field("a", string())
            .field("b", string())
            .field("a", number());
        assert_eq!(shape.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
