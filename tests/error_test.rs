//! Integration tests for StructError.

use litmus::{structs, Cause, ErrorKind, Struct, StructError, StructResult, Value};
use serde_json::json;

#[test]
fn test_assignment_error_full_context() {
    let error = StructError::assignment(&Value::from(json!([1])), "object").at_field("config");

    assert_eq!(error.kind(), ErrorKind::Assignment);
    assert_eq!(
        error.cause,
        Cause::Assignment {
            expected: "object".to_string(),
            actual: "array".to_string(),
        }
    );
    assert_eq!(error.message, "Type 'array' is not assignable to type 'object'.");
    assert_eq!(error.input, Value::from(json!([1])));
    assert_eq!(error.to_string(), "config: Type 'array' is not assignable to type 'object'.");
}

#[test]
fn test_non_assignment_errors_have_no_types() {
    let validation = StructError::validation(&Value::from(3), "too small");
    assert_eq!(validation.kind(), ErrorKind::Validation);
    assert_eq!(validation.expected(), None);
    assert_eq!(validation.actual(), None);

    let generic = StructError::generic(&Value::Null, "nope");
    assert_eq!(generic.kind(), ErrorKind::Generic);
    assert_eq!(generic.to_string(), "(root): nope");
}

#[test]
fn test_paths_are_built_by_prepending() {
    let error = StructError::validation(&Value::from(0), "bad")
        .at_field("n")
        .at_index(1)
        .at_field("items");
    assert_eq!(error.path.to_strings(), vec!["items", "1", "n"]);
    assert_eq!(error.to_string(), "items[1].n: bad");
}

#[test]
fn test_combinators_never_change_the_kind() {
    let shape = structs::object().field(
        "outer",
        structs::array(structs::object().field("flag", structs::boolean())),
    );
    let cases = [
        (json!({"outer": [{"flag": 1}]}), ErrorKind::Assignment),
        (json!({"outer": "x"}), ErrorKind::Assignment),
    ];
    for (input, kind) in cases {
        assert_eq!(shape.validate(&Value::from(input)).unwrap_err().kind(), kind);
    }

    let numbers = structs::object().field("n", structs::array(structs::number()));
    let err = numbers
        .validate(&Value::from(json!({"n": [1, null]})))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Assignment);

    let dates = structs::object().field("d", structs::as_date());
    let err = dates.validate(&Value::from(json!({"d": "garbage"}))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.path.to_strings(), vec!["d"]);
}

#[test]
fn test_error_works_with_question_mark() {
    fn parse_port(value: &Value) -> StructResult<u16> {
        let n = structs::number().validate(value)?;
        Ok(n as u16)
    }

    fn load(value: &Value) -> Result<u16, Box<dyn std::error::Error>> {
        Ok(parse_port(value)?)
    }

    assert_eq!(parse_port(&Value::from(8080)), Ok(8080));
    let err = load(&Value::from("http")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "(root): Type 'string' is not assignable to type 'number'."
    );
}
