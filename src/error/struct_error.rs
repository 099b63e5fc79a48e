//! Struct validation error types.
//!
//! A [`StructError`] describes the first failure a struct met: what kind of
//! failure it was, the offending input, a human-readable message, and the
//! path from the root of the original input down to the failure.

use std::fmt::{self, Display};

use crate::path::StructPath;
use crate::value::Value;

/// The three kinds of struct failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The runtime type of the input does not match the expected type.
    Assignment,
    /// The input has the right type but violates a constraint.
    Validation,
    /// Anything else a struct wants to report.
    Generic,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Assignment => "assignment",
            ErrorKind::Validation => "validation",
            ErrorKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Kind-specific detail of a [`StructError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// Type mismatch between what was expected and what arrived.
    Assignment {
        /// Name of the expected type.
        expected: String,
        /// Type tag of the input.
        actual: String,
    },
    Validation,
    Generic,
}

impl Cause {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Cause::Assignment { .. } => ErrorKind::Assignment,
            Cause::Validation => ErrorKind::Validation,
            Cause::Generic => ErrorKind::Generic,
        }
    }
}

/// A struct failure with full context.
///
/// # Example
///
/// ```rust
/// use litmus::{ErrorKind, StructError, Value};
///
/// let error = StructError::assignment(&Value::from(5), "string").at_field("name");
///
/// assert_eq!(error.kind(), ErrorKind::Assignment);
/// assert_eq!(error.message, "Type 'number' is not assignable to type 'string'.");
/// assert_eq!(error.path.to_strings(), vec!["name"]);
/// assert_eq!(error.to_string(), "name: Type 'number' is not assignable to type 'string'.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructError {
    /// Kind-specific detail.
    pub cause: Cause,
    /// The raw value that failed.
    pub input: Value,
    /// Human-readable error message.
    pub message: String,
    /// Location of `input` inside the value handed to the outermost struct.
    pub path: StructPath,
}

impl StructError {
    /// Creates an assignment error for `input`, which should have been an
    /// `expected`.
    ///
    /// The actual type is the canonical type tag of `input`.
    pub fn assignment(input: &Value, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        let actual = input.type_tag().to_string();
        let message = format!("Type '{}' is not assignable to type '{}'.", actual, expected);
        Self {
            cause: Cause::Assignment { expected, actual },
            input: input.clone(),
            message,
            path: StructPath::root(),
        }
    }

    /// Creates a validation error for a well-typed `input` that breaks a constraint.
    pub fn validation(input: &Value, message: impl Into<String>) -> Self {
        Self {
            cause: Cause::Validation,
            input: input.clone(),
            message: message.into(),
            path: StructPath::root(),
        }
    }

    /// Creates a generic error.
    pub fn generic(input: &Value, message: impl Into<String>) -> Self {
        Self {
            cause: Cause::Generic,
            input: input.clone(),
            message: message.into(),
            path: StructPath::root(),
        }
    }

    /// Replaces the message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Prepends an object key to the path and returns self for chaining.
    pub fn at_field(mut self, key: impl Into<String>) -> Self {
        self.path.prepend_field(key);
        self
    }

    /// Prepends an array index to the path and returns self for chaining.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.prepend_index(index);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }

    /// Name of the expected type, for assignment errors.
    pub fn expected(&self) -> Option<&str> {
        match &self.cause {
            Cause::Assignment { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// Type tag of the input, for assignment errors.
    pub fn actual(&self) -> Option<&str> {
        match &self.cause {
            Cause::Assignment { actual, .. } => Some(actual),
            _ => None,
        }
    }
}

impl Display for StructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {}", path_str, self.message)
    }
}

impl std::error::Error for StructError {}

// Structs are shared across threads, so their errors must be too.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<StructError>();
    assert_sync::<StructError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_error_derives_actual_type() {
        let error = StructError::assignment(&Value::from(json!([1])), "object");

        assert_eq!(error.kind(), ErrorKind::Assignment);
        assert_eq!(error.expected(), Some("object"));
        assert_eq!(error.actual(), Some("array"));
        assert_eq!(
            error.message,
            "Type 'array' is not assignable to type 'object'."
        );
        assert!(error.path.is_root());
    }

    #[test]
    fn test_validation_error() {
        let error = StructError::validation(&Value::from("c"), "Expecting one of a | b");

        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.input, Value::from("c"));
        assert_eq!(error.expected(), None);
        assert_eq!(error.actual(), None);
    }

    #[test]
    fn test_generic_error_with_message() {
        let error = StructError::generic(&Value::Null, "first").with_message("second");
        assert_eq!(error.kind(), ErrorKind::Generic);
        assert_eq!(error.message, "second");
    }

    #[test]
    fn test_path_prepending_order() {
        let error = StructError::validation(&Value::from(f64::NAN), "nan")
            .at_field("n")
            .at_index(1)
            .at_field("items");

        assert_eq!(error.path.to_strings(), vec!["items", "1", "n"]);
    }

    #[test]
    fn test_display() {
        let error = StructError::generic(&Value::Null, "value is null");
        assert_eq!(error.to_string(), "(root): value is null");

        let error = error.at_index(0).at_field("users");
        assert_eq!(error.to_string(), "users[0]: value is null");
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Assignment.to_string(), "assignment");
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
        assert_eq!(ErrorKind::Generic.to_string(), "generic");
    }
}
