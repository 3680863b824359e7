//! Derived combinators built on top of [`Continuation`] and [`Apply`].
//!
//! - [`DropRight`] / [`DropLeft`]: project an `Either` into a `Maybe` of one side
//! - [`check`] / [`check_or`]: filter a value into a `Maybe`
//! - [`continue_left`] / [`continue_right`]: single-sided continuations
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::{Either, Maybe, Monadic, check, drop_right};
//!
//! let dropped = Either::<i32, f64>::Left(12)
//!     .then(drop_right())
//!     .map(|i| i + 1);
//! assert_eq!(dropped.value_or(12), 13);
//!
//! assert_eq!(Maybe::of(12).then(check(|i: &i32| *i > 10)), Maybe::of(12));
//! assert_eq!(Maybe::of(12).then(check(|i: &i32| *i > 100)), Maybe::empty());
//! ```

use crate::compose::{Identity, Transform};

use super::continuation::{Apply, Continuation, Flatten, Inherit, Wrap};
use super::either::Either;
use super::maybe::Maybe;

// =============================================================================
// Projections
// =============================================================================

/// Projects an `Either<L, R>` onto `Maybe<L>`, discarding any right value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropRight;

/// Projects an `Either<L, R>` onto `Maybe<R>`, discarding any left value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropLeft;

impl<L, R> Apply<Either<L, R>> for DropRight {
    type Output = Maybe<L>;

    #[inline]
    fn apply(&self, input: Either<L, R>) -> Maybe<L> {
        input.drop_right()
    }
}

impl<L, R> Apply<Either<L, R>> for DropLeft {
    type Output = Maybe<R>;

    #[inline]
    fn apply(&self, input: Either<L, R>) -> Maybe<R> {
        input.drop_left()
    }
}

impl<L, R> Apply<Either<L, R>> for &DropRight {
    type Output = Maybe<L>;

    #[inline]
    fn apply(&self, input: Either<L, R>) -> Maybe<L> {
        input.drop_right()
    }
}

impl<L, R> Apply<Either<L, R>> for &DropLeft {
    type Output = Maybe<R>;

    #[inline]
    fn apply(&self, input: Either<L, R>) -> Maybe<R> {
        input.drop_left()
    }
}

/// Returns the [`DropRight`] projection.
#[inline]
pub const fn drop_right() -> DropRight {
    DropRight
}

/// Returns the [`DropLeft`] projection.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Either, Maybe, Monadic, drop_left};
///
/// let right: Either<i32, f64> = Either::Right(10.0);
/// assert_eq!(right.then(drop_left()), Maybe::of(10.0));
/// ```
#[inline]
pub const fn drop_left() -> DropLeft {
    DropLeft
}

// =============================================================================
// Filtering
// =============================================================================

/// A hook run when a [`check`] rejects its input.
pub trait OnReject<T> {
    /// Called with the rejected input.
    fn on_reject(&self, input: &T);
}

/// The hook used by [`check`]: does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Silent;

impl<T> OnReject<T> for Silent {
    #[inline]
    fn on_reject(&self, _input: &T) {}
}

impl<T, F> OnReject<T> for F
where
    F: Fn(&T),
{
    #[inline]
    fn on_reject(&self, input: &T) {
        self(input);
    }
}

/// The left side of a [`check`] continuation.
///
/// Maps an input to `Maybe::of(input)` when the predicate holds and to an
/// absent `Maybe` otherwise, calling the rejection hook in that case.
#[derive(Debug, Clone, Copy)]
pub struct Checked<P, E = Silent> {
    predicate: P,
    on_reject: E,
}

impl<T, P, E> Transform<T> for Checked<P, E>
where
    P: Fn(&T) -> bool,
    E: OnReject<T>,
{
    type Output = Maybe<T>;

    fn transform(&self, input: T) -> Maybe<T> {
        if (self.predicate)(&input) {
            Maybe::of(input)
        } else {
            trace_event!("check rejected its input");
            self.on_reject.on_reject(&input);
            Maybe::empty()
        }
    }
}

/// Builds a filter stage: `Maybe::of(input)` if `predicate(&input)` holds,
/// an absent `Maybe` otherwise.
///
/// The result is a flattening continuation, so it can be run on a plain value
/// or chained after a `Maybe` or a `Just` without double-wrapping.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Just, Maybe, Monadic, check};
///
/// let over_ten = check(|i: &i32| *i > 10);
/// assert_eq!(over_ten.run(12), Maybe::of(12));
/// assert_eq!(over_ten.run(5), Maybe::empty());
/// assert_eq!(Just::new(12).then(&over_ten), Maybe::of(12));
/// ```
#[inline]
pub const fn check<P>(predicate: P) -> Continuation<Checked<P, Silent>, Identity, Flatten> {
    check_or(predicate, Silent)
}

/// Like [`check`], but calls `on_reject(&input)` when the predicate fails.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use chainlift::control::{Maybe, check_or};
///
/// let rejected = RefCell::new(Vec::new());
/// let positive = check_or(|i: &i32| *i > 0, |i: &i32| rejected.borrow_mut().push(*i));
///
/// assert_eq!(positive.run(3), Maybe::of(3));
/// assert_eq!(positive.run(-4), Maybe::empty());
/// assert_eq!(*rejected.borrow(), vec![-4]);
/// ```
#[inline]
pub const fn check_or<P, E>(
    predicate: P,
    on_reject: E,
) -> Continuation<Checked<P, E>, Identity, Flatten> {
    Continuation::flattening(
        Checked {
            predicate,
            on_reject,
        },
        Identity,
    )
}

// =============================================================================
// Single-sided continuations
// =============================================================================

/// A continuation acting on the left side only; the right side is identity.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Either, Monadic, continue_left};
///
/// let input: Either<i32, f64> = Either::Left(2);
/// assert_eq!(input.then(continue_left(|i: i32| i * 5)), Either::Left(10));
/// ```
#[inline]
pub const fn continue_left<F>(function: F) -> Continuation<F, Identity, Wrap> {
    Continuation::new(function, Identity)
}

/// A continuation acting on the right side only; the left side is identity.
///
/// Appended to a flattening continuation with
/// [`compose`](Continuation::compose), it keeps the composite flattening.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Either, Monadic, continue_right};
///
/// let input: Either<i32, f64> = Either::Right(14.0);
/// assert_eq!(input.then(continue_right(|f: f64| f * 2.0)), Either::Right(28.0));
/// ```
#[inline]
pub const fn continue_right<F>(function: F) -> Continuation<Identity, F, Inherit> {
    Continuation::right_only(function)
}
