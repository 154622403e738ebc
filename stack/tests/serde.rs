#![cfg(feature = "serde")]

use ea_outcome::Result;
use ea_stack::{Stack, StackError};

#[test]
fn stack_errors_travel_as_variant_names() {
    assert_eq!(serde_json::to_string(&StackError::IsFull).unwrap(), "\"IsFull\"");
    let parsed: StackError = serde_json::from_str("\"IsEmpty\"").unwrap();
    assert_eq!(parsed, StackError::IsEmpty);
}

#[test]
fn failed_push_serializes_with_its_reason() {
    let mut stack = Stack::<u8, 1>::from([7]);
    let result = stack.push(8);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"Err":"IsFull"}"#);

    let back: Result<(), StackError> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
