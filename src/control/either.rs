//! Either type - a value that holds exactly one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. The core attaches no meaning
//! to either side; it is a plain two-sided sum.
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::Either;
//!
//! let left: Either<i32, f64> = Either::Left(1);
//! assert!(left.has_left());
//! assert_eq!(left.left_or(0), 1);
//!
//! let right: Either<i32, f64> = Either::Right(2.5);
//! assert_eq!(right.right_or_eval(|| 0.0), 2.5);
//!
//! // Using fold to handle both cases
//! let description = right.fold(|n| format!("int {n}"), |f| format!("float {f}"));
//! assert_eq!(description, "float 2.5");
//! ```

use std::fmt;
use std::hash::Hash;

use super::error::EmptyAccess;
use super::maybe::Maybe;

/// A value that holds exactly one of two types.
///
/// Never both, never neither: the enum makes the invariant structural.
/// Sides are read through the accessor contract - `has_left`/`has_right`
/// first, then `left`/`right` (which panic on the absent side) or one of the
/// `*_or` fallbacks.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use chainlift::control::Either;
///
/// let value: Either<i32, f64> = Either::Right(12.0);
/// assert!(!value.has_left());
/// assert_eq!(*value.right(), 12.0);
/// assert_eq!(value.swap(), Either::Left(12.0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Presence
    // =========================================================================

    /// Returns `true` if this holds a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.has_left());
    /// ```
    #[inline]
    pub const fn has_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this holds a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.has_right());
    /// ```
    #[inline]
    pub const fn has_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Strict Access
    // =========================================================================

    /// Returns a reference to the left value.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyAccess`] message if this holds a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(*left.left(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn left(&self) -> &L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => EmptyAccess::new("Either", "left").raise(),
        }
    }

    /// Returns a reference to the right value.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyAccess`] message if this holds a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), "hello");
    /// ```
    #[inline]
    #[track_caller]
    pub fn right(&self) -> &R {
        match self {
            Self::Left(_) => EmptyAccess::new("Either", "right").raise(),
            Self::Right(value) => value,
        }
    }

    /// Returns a reference to the left value, or [`EmptyAccess`].
    ///
    /// # Errors
    ///
    /// Returns `EmptyAccess` if this holds a right value.
    #[inline]
    pub const fn try_left(&self) -> Result<&L, EmptyAccess> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(EmptyAccess::new("Either", "left")),
        }
    }

    /// Returns a reference to the right value, or [`EmptyAccess`].
    ///
    /// # Errors
    ///
    /// Returns `EmptyAccess` if this holds a left value.
    #[inline]
    pub const fn try_right(&self) -> Result<&R, EmptyAccess> {
        match self {
            Self::Left(_) => Err(EmptyAccess::new("Either", "right")),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Optional Access
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the left value, or `default` if this holds a right value.
    ///
    /// The default is evaluated eagerly; use [`left_or_eval`](Self::left_or_eval)
    /// when computing it is expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let left: Either<i32, f64> = Either::Left(1);
    /// assert_eq!(left.left_or(0), 1);
    ///
    /// let right: Either<i32, f64> = Either::Right(1.5);
    /// assert_eq!(right.left_or(0), 0);
    /// ```
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the right value, or `default` if this holds a left value.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, or the result of `fallback` if this holds a
    /// right value.
    ///
    /// `fallback` runs only on the absent path, and at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let left: Either<i32, f64> = Either::Left(1);
    /// assert_eq!(left.left_or_eval(|| unreachable!()), 1);
    /// ```
    #[inline]
    pub fn left_or_eval<F>(self, fallback: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => fallback(),
        }
    }

    /// Returns the right value, or the result of `fallback` if this holds a
    /// left value.
    ///
    /// `fallback` runs only on the absent path, and at most once.
    #[inline]
    pub fn right_or_eval<F>(self, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => fallback(),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the side that is present.
    ///
    /// Only the function for the present side is invoked.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the Either by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides, types included. `swap` is its own inverse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.clone().swap(), Either::Right(42));
    /// assert_eq!(left.clone().swap().swap(), left);
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts both sides into wider types.
    ///
    /// This is a structural upcast: an `Either<L, R>` becomes an
    /// `Either<L2, R2>` whenever `L: Into<L2>` and `R: Into<R2>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    ///
    /// let narrow: Either<i32, f32> = Either::Left(7);
    /// let wide: Either<i64, f64> = narrow.convert();
    /// assert_eq!(wide, Either::Left(7_i64));
    /// ```
    #[inline]
    pub fn convert<L2, R2>(self) -> Either<L2, R2>
    where
        L: Into<L2>,
        R: Into<R2>,
    {
        self.bimap(Into::into, Into::into)
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Keeps the left side as a [`Maybe`], discarding any right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Either, Maybe};
    ///
    /// let left: Either<i32, f64> = Either::Left(12);
    /// assert_eq!(left.drop_right(), Maybe::of(12));
    ///
    /// let right: Either<i32, f64> = Either::Right(10.0);
    /// assert_eq!(right.drop_right(), Maybe::empty());
    /// ```
    #[inline]
    pub fn drop_right(self) -> Maybe<L> {
        Maybe::from(self.into_left())
    }

    /// Keeps the right side as a [`Maybe`], discarding any left value.
    #[inline]
    pub fn drop_left(self) -> Maybe<R> {
        Maybe::from(self.into_right())
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()` if this holds a right value.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left_or_eval(L::default)
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` if this holds a left value.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right_or_eval(R::default)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, f64> = Either::Left(42);
        assert!(value.has_left());
        assert!(!value.has_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, f64> = Either::Right(1.5);
        assert!(value.has_right());
        assert!(!value.has_left());
    }

    #[rstest]
    fn test_left_or_eval_skips_thunk_when_present() {
        let mut calls = 0;
        let value: Either<i32, f64> = Either::Left(1);
        let result = value.left_or_eval(|| {
            calls += 1;
            0
        });
        assert_eq!(result, 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_right_or_eval_runs_thunk_once_when_absent() {
        let mut calls = 0;
        let value: Either<i32, f64> = Either::Left(1);
        let result = value.right_or_eval(|| {
            calls += 1;
            9.5
        });
        assert_eq!(result, 9.5);
        assert_eq!(calls, 1);
    }

    #[rstest]
    #[should_panic(expected = "EmptyAccess: called `Either::left()`")]
    fn test_left_on_right_panics() {
        let value: Either<i32, f64> = Either::Right(1.0);
        let _ = value.left();
    }

    #[rstest]
    fn test_try_right_on_left_is_error() {
        let value: Either<i32, f64> = Either::Left(1);
        assert_eq!(value.try_right(), Err(EmptyAccess::new("Either", "right")));
        assert_eq!(value.try_left(), Ok(&1));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }
}
