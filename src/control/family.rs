//! Variant membership: the closed family of chainable containers.
//!
//! [`Monadic`] is implemented for exactly three type constructors -
//! [`Either`], [`Maybe`] and [`Just`] - and is sealed, so membership is an
//! exact, compile-time fact. Every flatten-or-wrap decision in the crate is
//! expressed as a `Monadic` bound:
//!
//! - [`Just::and_then`] accepts any function returning a family member
//! - a [`Flatten`](super::Flatten) continuation applied to a `Just` requires its
//!   left side to produce a family member
//!
//! Non-members are rejected by the type checker rather than inspected at run
//! time:
//!
//! ```compile_fail
//! use chainlift::control::Just;
//!
//! // i32 is not a family member, so bind refuses it; use `map` instead.
//! let _ = Just::new(1).and_then(|i| i + 1);
//! ```

use super::continuation::Apply;
use super::either::Either;
use super::just::Just;
use super::maybe::Maybe;

mod sealed {
    pub trait Sealed {}

    impl<L, R> Sealed for super::Either<L, R> {}
    impl<T> Sealed for super::Maybe<T> {}
    impl<T> Sealed for super::Just<T> {}
}

/// Which member of the family a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `Either<L, R>`
    Either,
    /// `Maybe<T>`
    Maybe,
    /// `Just<T>`
    Just,
}

/// Marker for the containers that chain with continuations.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Either, Family, Just, Maybe, Monadic};
///
/// assert_eq!(<Either<i32, f64> as Monadic>::FAMILY, Family::Either);
/// assert_eq!(<Maybe<i32> as Monadic>::FAMILY, Family::Maybe);
/// assert_eq!(<Just<i32> as Monadic>::FAMILY, Family::Just);
/// ```
pub trait Monadic: sealed::Sealed + Sized {
    /// The family member this type instantiates.
    const FAMILY: Family;

    /// Feeds this container into `continuation` and returns the result.
    ///
    /// This is the uniform, left-associative chaining operation: anything
    /// that implements [`Apply<Self>`] can follow, including references to
    /// reusable continuations and bare functions. A bare function receives
    /// a whole `Either`, or the value held by a `Maybe` or a `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Continuation, Either, Just, Maybe, Monadic};
    ///
    /// let step = Continuation::new(|i: i32| i + 1, |f: f64| f + 2.0);
    /// let left: Either<i32, f64> = Either::Left(1);
    /// assert_eq!(left.then(&step).then(&step), Either::Left(3));
    ///
    /// assert_eq!(left.then(|e: Either<i32, f64>| e.drop_right()), Maybe::of(1));
    /// assert_eq!(Just::new(1).then(|i: i32| i * 7), Just::new(7));
    /// ```
    #[inline]
    fn then<C>(self, continuation: C) -> C::Output
    where
        C: Apply<Self>,
    {
        continuation.apply(self)
    }
}

impl<L, R> Monadic for Either<L, R> {
    const FAMILY: Family = Family::Either;
}

impl<T> Monadic for Maybe<T> {
    const FAMILY: Family = Family::Maybe;
}

impl<T> Monadic for Just<T> {
    const FAMILY: Family = Family::Just;
}

static_assertions::assert_impl_all!(Either<i32, f64>: Monadic, Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Monadic, Send, Sync);
static_assertions::assert_impl_all!(Just<Vec<u8>>: Monadic, Send, Sync);
static_assertions::assert_not_impl_any!(i32: Monadic);
static_assertions::assert_not_impl_any!(Option<i32>: Monadic);
static_assertions::assert_not_impl_any!(Result<i32, String>: Monadic);
