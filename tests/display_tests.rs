//! Tests for the Display and Debug renderings of the containers and of
//! EmptyAccess.

#![cfg(feature = "control")]

use chainlift::control::{EmptyAccess, Either, Just, Maybe};
use rstest::rstest;

#[rstest]
#[case(Either::Left(1), "Left(1)")]
#[case(Either::Right("text"), "Right(text)")]
fn either_display(#[case] value: Either<i32, &str>, #[case] expected: &str) {
    assert_eq!(format!("{value}"), expected);
}

#[rstest]
fn either_debug_quotes_strings() {
    let value: Either<i32, &str> = Either::Right("text");
    assert_eq!(format!("{value:?}"), "Right(\"text\")");
}

#[rstest]
#[case(Maybe::of(12), "Maybe(12)")]
#[case(Maybe::empty(), "Maybe(<absent>)")]
fn maybe_display(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(format!("{value}"), expected);
}

#[rstest]
fn maybe_debug() {
    assert_eq!(format!("{:?}", Maybe::of("a")), "Maybe(\"a\")");
    assert_eq!(format!("{:?}", Maybe::<i32>::empty()), "Maybe(<absent>)");
}

#[rstest]
fn just_display_and_debug() {
    assert_eq!(format!("{}", Just::new(3.5)), "Just(3.5)");
    assert_eq!(format!("{:?}", Just::new('x')), "Just('x')");
}

#[rstest]
fn nested_display() {
    let nested = Just::new(Maybe::of(Either::<i32, f64>::Left(7)));
    assert_eq!(format!("{nested}"), "Just(Maybe(Left(7)))");
}

#[rstest]
fn empty_access_is_an_error_value() {
    let error: Box<dyn std::error::Error> = Box::new(Maybe::<u8>::empty().try_value().unwrap_err());
    assert_eq!(
        error.to_string(),
        "EmptyAccess: called `Maybe::value()` on a value without that slot"
    );
}

#[rstest]
fn empty_access_debug_lists_fields() {
    let error: EmptyAccess = Either::<i32, i32>::Left(1).try_right().unwrap_err();
    assert_eq!(
        format!("{error:?}"),
        "EmptyAccess { container: \"Either\", accessor: \"right\" }"
    );
}
