//! Continuation - a paired transformation applied by branch.
//!
//! A [`Continuation`] holds two transformations, `left` and `right`, and knows
//! how to apply itself to each family member:
//!
//! | Input | Result |
//! |---|---|
//! | `Either::Left(l)` | `Either::Left(left(l))`, `right` not invoked |
//! | `Either::Right(r)` | `Either::Right(right(r))`, `left` not invoked |
//! | present `Maybe(t)` | `left(t)`, wrapped or flattened by the lifting mode |
//! | absent `Maybe` | `right(Absent)` as a hook, then an absent `Maybe` |
//! | `Just(t)` | `left(t)`, wrapped or flattened by the lifting mode |
//! | plain value `v` ([`run`](Continuation::run)) | `left(v)` |
//!
//! Exactly one side is invoked per application.
//!
//! # Lifting modes
//!
//! Whether the result of `left` is wrapped into the input's container or
//! returned as-is is decided by the third type parameter:
//!
//! - [`Wrap`] (the default, built with [`Continuation::new`]) is monadic `map`
//! - [`Flatten`] (built with [`Continuation::flattening`]) is monadic `bind`;
//!   `left` must already return a family member
//! - [`Inherit`] (built with [`Continuation::identity`] and
//!   [`continue_right`](super::continue_right)) marks a continuation whose left
//!   side is the identity; it wraps when applied on its own and takes the
//!   mode of whatever it is composed after
//!
//! # Composition
//!
//! [`compose`](Continuation::compose) composes side by side:
//! `(a.compose(b)).left == b.left ∘ a.left` and likewise for `right`.
//! Composition is associative and [`Continuation::identity`] is a unit on both
//! sides. [`map`](Continuation::map) composes a bare function onto the left
//! side only. The mode of a composite is resolved by [`Resolve`].
//!
//! # Bare functions
//!
//! Plain closures can follow [`then`](super::Monadic::then) too. On an
//! `Either` the closure receives the whole container; on a `Maybe` or a
//! `Just` it receives the held value and its result is wrapped, like `map`.
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::{Continuation, Either, Just, Maybe, Monadic};
//!
//! let operations = Continuation::new(|i: i32| i + 1, |f: f64| f + 2.0)
//!     .compose(Continuation::new(|i: i32| i + 2, |f: f64| f + 3.0));
//!
//! let left: Either<i32, f64> = Either::Left(1);
//! assert_eq!(left.then(&operations), Either::Left(4));
//!
//! let right: Either<i32, f64> = Either::Right(10.0);
//! assert_eq!(right.then(&operations), Either::Right(15.0));
//!
//! let just_operations = Continuation::new(|i: i32| i + 1, chainlift::compose::Identity)
//!     .map(|i: i32| i + 2);
//! assert_eq!(Just::new(0).then(&just_operations), Just::new(3));
//! assert_eq!(Maybe::of(12).then(&just_operations), Maybe::of(15));
//! ```
//!
//! Sides whose types do not line up are rejected when the continuation is
//! applied:
//!
//! ```compile_fail
//! use chainlift::control::{Continuation, Either, Monadic};
//!
//! let mismatched = Continuation::new(|i: i32| i + 1, |f: f64| f)
//!     .compose(Continuation::new(|s: String| s.len(), |f: f64| f));
//! let input: Either<i32, f64> = Either::Left(1);
//! let _ = input.then(&mismatched);
//! ```
//!
//! and a flattening continuation must produce a family member:
//!
//! ```compile_fail
//! use chainlift::compose::Identity;
//! use chainlift::control::{Continuation, Just, Monadic};
//!
//! let _ = Just::new(1).then(Continuation::flattening(|i: i32| i + 1, Identity));
//! ```

use std::marker::PhantomData;

use crate::compose::{BoxedTransform, Composed, Identity, Transform, boxed};

use super::either::Either;
use super::family::Monadic;
use super::just::Just;
use super::maybe::Maybe;

/// The "no value" marker handed to the right side of a continuation when it
/// is applied to an absent [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Wrap {}
    impl Sealed for super::Flatten {}
    impl Sealed for super::Inherit {}
}

/// How a continuation lifts the result of its left side.
pub trait Lifting: sealed::Sealed {}

/// The lifting mode of `previous.compose(next)`, where `Self` is the mode of
/// `next` and `Previous` the mode of `previous`.
///
/// [`Wrap`] and [`Flatten`] decide for themselves. [`Inherit`] defers to
/// `Previous`, so appending an identity-left continuation never changes how
/// the left side is lifted.
pub trait Resolve<Previous: Lifting>: Lifting {
    /// The resolved mode.
    type Mode: Lifting;
}

/// Lifting mode that wraps `left`'s result into the input's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrap;

/// Lifting mode that returns `left`'s result (a family member) unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flatten;

/// Lifting mode of a continuation whose left side is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inherit;

impl Lifting for Wrap {}
impl Lifting for Flatten {}
impl Lifting for Inherit {}

impl<Previous: Lifting> Resolve<Previous> for Wrap {
    type Mode = Self;
}

impl<Previous: Lifting> Resolve<Previous> for Flatten {
    type Mode = Self;
}

impl<Previous: Lifting> Resolve<Previous> for Inherit {
    type Mode = Previous;
}

/// Something that can be applied to an `Input` container.
///
/// Implemented by [`Continuation`] for every family member, by the projection
/// combinators, by bare functions, and by references to continuations and
/// projections, so a single continuation value can be reused across many
/// inputs.
pub trait Apply<Input> {
    /// The container produced by the application.
    type Output;

    /// Applies `self` to `input`.
    fn apply(&self, input: Input) -> Self::Output;
}

impl<L, R, M, Input> Apply<Input> for &Continuation<L, R, M>
where
    Continuation<L, R, M>: Apply<Input>,
{
    type Output = <Continuation<L, R, M> as Apply<Input>>::Output;

    #[inline]
    fn apply(&self, input: Input) -> Self::Output {
        (**self).apply(input)
    }
}

/// An immutable pair of transformations applied by branch.
///
/// # Type Parameters
///
/// * `L` - The left transformation (defaults to [`Identity`])
/// * `R` - The right transformation (defaults to [`Identity`])
/// * `M` - The lifting mode, [`Wrap`] or [`Flatten`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Continuation<L = Identity, R = Identity, M = Wrap> {
    left: L,
    right: R,
    mode: PhantomData<M>,
}

impl<L, R> Continuation<L, R, Wrap> {
    /// Creates a wrapping continuation from its two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Continuation, Just, Monadic};
    ///
    /// let nested = Just::new(1).then(Continuation::new(|i: i32| Just::new(i), |f: f64| f));
    /// assert_eq!(nested, Just::new(Just::new(1)));
    /// ```
    #[inline]
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            mode: PhantomData,
        }
    }
}

impl<L, R> Continuation<L, R, Flatten> {
    /// Creates a flattening continuation from its two sides.
    ///
    /// Applied to a `Just` or a `Maybe`, the result of `left` is returned
    /// as-is instead of being wrapped again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::compose::Identity;
    /// use chainlift::control::{Continuation, Either, Just, Monadic};
    ///
    /// let branch = Continuation::flattening(
    ///     |i: i32| -> Either<i32, f64> { if i == 12 { Either::Left(14) } else { Either::Right(12.0) } },
    ///     Identity,
    /// );
    /// assert_eq!(Just::new(13).then(&branch), Either::Right(12.0));
    /// ```
    #[inline]
    pub const fn flattening(left: L, right: R) -> Self {
        Self {
            left,
            right,
            mode: PhantomData,
        }
    }
}

impl<R> Continuation<Identity, R, Inherit> {
    /// Creates a continuation that leaves the left side untouched.
    ///
    /// Composed after a flattening continuation, the result still flattens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Continuation, Either, Monadic};
    ///
    /// let input: Either<i32, f64> = Either::Right(1.5);
    /// assert_eq!(input.then(Continuation::right_only(|f: f64| f * 2.0)), Either::Right(3.0));
    /// ```
    #[inline]
    pub const fn right_only(right: R) -> Self {
        Self {
            left: Identity,
            right,
            mode: PhantomData,
        }
    }
}

impl Continuation<Identity, Identity, Inherit> {
    /// The identity continuation: a unit for [`compose`](Continuation::compose).
    #[inline]
    pub const fn identity() -> Self {
        Self::right_only(Identity)
    }
}

impl<L, R, M> Continuation<L, R, M> {
    /// Returns the left transformation.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns the right transformation.
    #[inline]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Composes `other` after `self`, side by side.
    ///
    /// The result takes `other`'s lifting mode, since `other.left` produces
    /// the final value, unless `other` is in [`Inherit`] mode; then `self`'s
    /// mode is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Continuation, Either, Monadic};
    ///
    /// let first = Continuation::new(|i: i32| i * 2, |s: &str| s.len());
    /// let second = Continuation::new(|i: i32| i.to_string(), |n: usize| n + 1);
    /// let both = first.compose(second);
    ///
    /// let input: Either<i32, &str> = Either::Right("four");
    /// assert_eq!(input.then(&both), Either::Right(5));
    /// ```
    #[inline]
    pub fn compose<L2, R2, M2>(
        self,
        other: Continuation<L2, R2, M2>,
    ) -> Continuation<Composed<L, L2>, Composed<R, R2>, <M2 as Resolve<M>>::Mode>
    where
        M: Lifting,
        M2: Resolve<M>,
    {
        Continuation {
            left: Composed::new(self.left, other.left),
            right: Composed::new(self.right, other.right),
            mode: PhantomData,
        }
    }

    /// Composes a bare function onto the left side, leaving `right` untouched.
    ///
    /// The result wraps, like any [`Continuation::new`].
    #[inline]
    pub fn map<G>(self, function: G) -> Continuation<Composed<L, G>, R, Wrap> {
        Continuation {
            left: Composed::new(self.left, function),
            right: self.right,
            mode: PhantomData,
        }
    }

    /// Composes a bare function, which returns a family member, onto the left
    /// side, leaving `right` untouched.
    ///
    /// The result flattens, like any [`Continuation::flattening`].
    #[inline]
    pub fn flat_map<G>(self, function: G) -> Continuation<Composed<L, G>, R, Flatten> {
        Continuation {
            left: Composed::new(self.left, function),
            right: self.right,
            mode: PhantomData,
        }
    }

    /// Applies the left side directly to a plain value, without wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Continuation, Maybe, check};
    ///
    /// assert_eq!(Continuation::new(|i: i32| i + 1, |f: f64| f).run(1), 2);
    /// assert_eq!(check(|i: &i32| *i > 10).run(12), Maybe::of(12));
    /// ```
    #[inline]
    pub fn run<A>(&self, value: A) -> L::Output
    where
        L: Transform<A>,
    {
        self.left.transform(value)
    }

    /// Erases both sides into boxed trait objects.
    ///
    /// Continuations built from different closures have different types;
    /// boxing lets continuations with the same signature share one type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::compose::Identity;
    /// use chainlift::control::{Continuation, Just, Monadic};
    ///
    /// let steps = vec![
    ///     Continuation::new(|i: i32| i + 1, Identity).boxed::<i32, i32>(),
    ///     Continuation::new(|i: i32| i * 3, Identity).boxed::<i32, i32>(),
    /// ];
    /// let result = steps.iter().fold(Just::new(1), |acc, step| acc.then(step));
    /// assert_eq!(result, Just::new(6));
    /// ```
    pub fn boxed<A, B>(
        self,
    ) -> Continuation<BoxedTransform<A, L::Output>, BoxedTransform<B, R::Output>, M>
    where
        L: Transform<A> + 'static,
        R: Transform<B> + 'static,
    {
        Continuation {
            left: boxed(self.left),
            right: boxed(self.right),
            mode: PhantomData,
        }
    }

    fn skip_absent(&self)
    where
        R: Transform<Absent>,
    {
        trace_event!("continuation applied to absent Maybe; running right-side hook");
        let _ = self.right.transform(Absent);
    }
}

// =============================================================================
// Either: side by side, independent of the lifting mode
// =============================================================================

impl<L, R, M, A, B> Apply<Either<A, B>> for Continuation<L, R, M>
where
    L: Transform<A>,
    R: Transform<B>,
{
    type Output = Either<L::Output, R::Output>;

    #[inline]
    fn apply(&self, input: Either<A, B>) -> Self::Output {
        match input {
            Either::Left(value) => Either::Left(self.left.transform(value)),
            Either::Right(value) => Either::Right(self.right.transform(value)),
        }
    }
}

// =============================================================================
// Maybe
// =============================================================================

impl<L, R, T> Apply<Maybe<T>> for Continuation<L, R, Wrap>
where
    L: Transform<T>,
    R: Transform<Absent>,
{
    type Output = Maybe<L::Output>;

    fn apply(&self, input: Maybe<T>) -> Self::Output {
        match input.into_option() {
            Some(value) => Maybe::of(self.left.transform(value)),
            None => {
                self.skip_absent();
                Maybe::empty()
            }
        }
    }
}

impl<L, R, T> Apply<Maybe<T>> for Continuation<L, R, Inherit>
where
    L: Transform<T>,
    R: Transform<Absent>,
{
    type Output = Maybe<L::Output>;

    fn apply(&self, input: Maybe<T>) -> Self::Output {
        match input.into_option() {
            Some(value) => Maybe::of(self.left.transform(value)),
            None => {
                self.skip_absent();
                Maybe::empty()
            }
        }
    }
}

impl<L, R, T, U> Apply<Maybe<T>> for Continuation<L, R, Flatten>
where
    L: Transform<T, Output = Maybe<U>>,
    R: Transform<Absent>,
{
    type Output = Maybe<U>;

    fn apply(&self, input: Maybe<T>) -> Self::Output {
        match input.into_option() {
            Some(value) => self.left.transform(value),
            None => {
                self.skip_absent();
                Maybe::empty()
            }
        }
    }
}

// =============================================================================
// Just
// =============================================================================

impl<L, R, T> Apply<Just<T>> for Continuation<L, R, Wrap>
where
    L: Transform<T>,
{
    type Output = Just<L::Output>;

    #[inline]
    fn apply(&self, input: Just<T>) -> Self::Output {
        Just::new(self.left.transform(input.into_inner()))
    }
}

impl<L, R, T> Apply<Just<T>> for Continuation<L, R, Inherit>
where
    L: Transform<T>,
{
    type Output = Just<L::Output>;

    #[inline]
    fn apply(&self, input: Just<T>) -> Self::Output {
        Just::new(self.left.transform(input.into_inner()))
    }
}

impl<L, R, T> Apply<Just<T>> for Continuation<L, R, Flatten>
where
    L: Transform<T>,
    L::Output: Monadic,
{
    type Output = L::Output;

    #[inline]
    fn apply(&self, input: Just<T>) -> Self::Output {
        self.left.transform(input.into_inner())
    }
}

// =============================================================================
// Bare functions
// =============================================================================

impl<F, A, B, O> Apply<Either<A, B>> for F
where
    F: Fn(Either<A, B>) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, input: Either<A, B>) -> O {
        self(input)
    }
}

impl<F, T, O> Apply<Maybe<T>> for F
where
    F: Fn(T) -> O,
{
    type Output = Maybe<O>;

    #[inline]
    fn apply(&self, input: Maybe<T>) -> Maybe<O> {
        input.map(self)
    }
}

impl<F, T, O> Apply<Just<T>> for F
where
    F: Fn(T) -> O,
{
    type Output = Just<O>;

    #[inline]
    fn apply(&self, input: Just<T>) -> Just<O> {
        input.map(self)
    }
}
