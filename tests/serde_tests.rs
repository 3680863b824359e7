#![cfg(feature = "serde")]

//! Integration tests for serde support in chainlift.
//!
//! `Either` serializes as an externally tagged enum; `Maybe` and `Just` are
//! transparent over their contents.

use chainlift::control::{Either, Just, Maybe};
use rstest::rstest;

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_either_json_shape() {
    let right: Either<String, i32> = Either::Right(42);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":42}"#);
}

// =============================================================================
// Maybe Integration Tests
// =============================================================================

#[rstest]
#[case(Maybe::of(12), "12")]
#[case(Maybe::empty(), "null")]
fn test_maybe_is_transparent(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    let restored: Maybe<i32> = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_maybe_inside_struct_field() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Record {
        name: String,
        age: Maybe<u8>,
    }

    let record = Record {
        name: "chain".to_string(),
        age: Maybe::empty(),
    };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"name":"chain","age":null}"#);
    assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
}

// =============================================================================
// Just Integration Tests
// =============================================================================

#[rstest]
fn test_just_is_transparent() {
    let value = Just::new(vec![1, 2, 3]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "[1,2,3]");
    let restored: Just<Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_nested_containers_roundtrip() {
    let value: Just<Either<Maybe<i32>, String>> = Just::new(Either::Left(Maybe::of(5)));
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Left":5}"#);
    let restored: Just<Either<Maybe<i32>, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
