//! Just type - a value that is always present.
//!
//! `Just<T>` is the canonical way to start a chain with a guaranteed value.
//! It behaves like the identity monad:
//!
//! - [`map`](Just::map) wraps the result in a new `Just`
//! - [`and_then`](Just::and_then) hands back whatever container the function
//!   returns (`Either`, `Maybe` or `Just`) without double-wrapping it
//!
//! Reading the value never fails.

use std::fmt;
use std::ops::Deref;

use super::family::Monadic;

/// A container that always holds exactly one value.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Either, Just};
///
/// let start = Just::new(12);
/// assert_eq!(*start, 12);
///
/// let next = start.map(|i| i + 1);
/// assert_eq!(next, Just::new(13));
///
/// let branched: Either<i32, f64> = next.and_then(|i| {
///     if i == 12 { Either::Left(14) } else { Either::Right(12.0) }
/// });
/// assert_eq!(branched, Either::Right(12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Just<T>(T);

impl<T> Just<T> {
    /// Creates a new `Just` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Just;
    ///
    /// const START: Just<i32> = Just::new(42);
    /// assert_eq!(START.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Consumes the `Just` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Applies `function` to the value and wraps the result in a new `Just`.
    ///
    /// This is monadic `map`: the result is wrapped even when `function`
    /// returns a container. Use [`and_then`](Self::and_then) to flatten.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Just<U>
    where
        F: FnOnce(T) -> U,
    {
        Just(function(self.0))
    }

    /// Applies `function`, which returns any family member, and returns that
    /// member unchanged.
    ///
    /// This is monadic `bind`: `Just::new(v).and_then(f) == f(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::{Just, Maybe};
    ///
    /// let checked = Just::new(5).and_then(|n| if n > 10 { Maybe::of(n) } else { Maybe::empty() });
    /// assert_eq!(checked, Maybe::empty());
    /// ```
    #[inline]
    pub fn and_then<M, F>(self, function: F) -> M
    where
        M: Monadic,
        F: FnOnce(T) -> M,
    {
        function(self.0)
    }

    /// Converts the contained value into a wider type.
    #[inline]
    pub fn convert<U>(self) -> Just<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }
}

impl<T> Deref for Just<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Just<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Just<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Just<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Just({})", self.0)
    }
}
