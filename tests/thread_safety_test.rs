//! Tests for sharing structs across threads.

use litmus::structs::{self, ArrayStruct, NumberStruct, ObjectStruct};
use litmus::{Struct, StructError, Value, ValueValidator};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn user_struct() -> ObjectStruct {
    structs::object()
        .field("name", structs::string())
        .field("age", structs::number())
        .field("roles", structs::array(structs::enums(["admin", "user"])))
}

#[test]
fn test_concurrent_validation() {
    let schema = Arc::new(user_struct());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let input = Value::from(json!({
                    "name": format!("User{}", i),
                    "age": 20 + i,
                    "roles": ["user"],
                }));
                let out = schema.validate(&input).unwrap();
                assert_eq!(out["age"], Value::Number(f64::from(20 + i)));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_errors_cross_threads() {
    let schema = Arc::new(user_struct());

    let handle = {
        let schema = Arc::clone(&schema);
        thread::spawn(move || -> Result<(), StructError> {
            schema
                .validate(&Value::from(json!({"name": "x", "age": 1, "roles": ["root"]})))
                .map(|_| ())
        })
    };

    let err = handle.join().unwrap().unwrap_err();
    assert_eq!(err.path.to_strings(), vec!["roles", "0"]);
}

#[test]
fn test_structs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ObjectStruct>();
    assert_send_sync::<ArrayStruct<NumberStruct>>();
    assert_send_sync::<Box<dyn ValueValidator>>();
    assert_send_sync::<StructError>();
}
