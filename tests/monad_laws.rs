//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! The same laws are checked for the cross-family bind `Just::and_then`.

#![cfg(feature = "typeclass")]

use chainlift::control::{Either, Just, Maybe};
use chainlift::typeclass::Monad;
use proptest::prelude::*;

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::empty() }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::of(n) } else { Maybe::empty() }
}

fn sign(n: i32) -> Either<i32, i32> {
    if n < 0 { Either::Left(n) } else { Either::Right(n) }
}

// =============================================================================
// Maybe<A> Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<()>>::pure(value).flat_map(half), half(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let monad = Maybe::from(value);
        prop_assert_eq!(monad.flat_map(<Maybe<()>>::pure), monad);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let monad = Maybe::from(value);
        prop_assert_eq!(
            monad.flat_map(half).flat_map(positive),
            monad.flat_map(|x| half(x).flat_map(positive))
        );
    }

    /// flat_map agrees with the inherent and_then
    #[test]
    fn prop_maybe_flat_map_matches_and_then(value in any::<Option<i32>>()) {
        let monad = Maybe::from(value);
        prop_assert_eq!(monad.flat_map(half), monad.and_then(half));
    }
}

// =============================================================================
// Just<A> Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_just_left_identity(value in any::<i32>()) {
        let function = |n: i32| Just::new(n.wrapping_mul(3));
        prop_assert_eq!(<Just<()>>::pure(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_just_right_identity(value in any::<i32>()) {
        let monad = Just::new(value);
        prop_assert_eq!(monad.flat_map(<Just<()>>::pure), monad);
    }

    #[test]
    fn prop_just_associativity(value in any::<i32>()) {
        let function1 = |n: i32| Just::new(n.wrapping_add(5));
        let function2 = |n: i32| Just::new(n.wrapping_mul(2));
        let monad = Just::new(value);
        prop_assert_eq!(
            monad.flat_map(function1).flat_map(function2),
            monad.flat_map(|x| function1(x).flat_map(function2))
        );
    }

    /// Cross-family bind: Just{v}.and_then(f) == f(v) for every member
    #[test]
    fn prop_just_and_then_is_left_identity_across_family(value in any::<i32>()) {
        prop_assert_eq!(Just::new(value).and_then(half), half(value));
        prop_assert_eq!(Just::new(value).and_then(sign), sign(value));
    }
}
