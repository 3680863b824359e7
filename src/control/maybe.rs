//! Maybe type - an immutable slot holding zero or one value.
//!
//! `Maybe<T>` is a thin wrapper over a single `Option<T>` slot whose contents
//! are only reachable through the accessor contract: check with
//! [`has_value`](Maybe::has_value), then read with [`value`](Maybe::value), or
//! use one of the fallbacks.
//!
//! Combining two `Maybe`s with [`or`](Maybe::or)/[`or_else`](Maybe::or_else)
//! is "first success wins": the left operand is returned when present, the
//! right one is only evaluated when it is needed.
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::Maybe;
//!
//! let empty: Maybe<i32> = Maybe::empty();
//! assert_eq!(empty.value_or(13), 13);
//! assert_eq!(empty.value_or_eval(|| 14), 14);
//!
//! let present = Maybe::of(12);
//! assert_eq!(present.value_or(13), 12);
//! assert_eq!(present.map(|i| i + 1), Maybe::of(13));
//! assert_eq!(empty.or(present), Maybe::of(12));
//! ```

use std::fmt;

use super::error::EmptyAccess;
use super::just::Just;

/// An immutable container holding zero or one value of type `T`.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::Maybe;
///
/// let value = Maybe::of("hello");
/// assert!(value.has_value());
/// assert_eq!(*value.value(), "hello");
///
/// let nothing: Maybe<&str> = Maybe::empty();
/// assert!(nothing.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a reference to the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyAccess`] message if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    ///
    /// assert_eq!(*Maybe::of(12).value(), 12);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.0 {
            Some(value) => value,
            None => EmptyAccess::new("Maybe", "value").raise(),
        }
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyAccess`] message if no value is present.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.0 {
            Some(value) => value,
            None => EmptyAccess::new("Maybe", "into_value").raise(),
        }
    }

    /// Returns a reference to the contained value, or [`EmptyAccess`].
    ///
    /// # Errors
    ///
    /// Returns `EmptyAccess` if no value is present.
    #[inline]
    pub const fn try_value(&self) -> Result<&T, EmptyAccess> {
        match &self.0 {
            Some(value) => Ok(value),
            None => Err(EmptyAccess::new("Maybe", "value")),
        }
    }

    /// Borrows the contents, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe(self.0.as_ref())
    }

    /// Returns the underlying slot as an `Option<&T>`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Converts into the native `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Returns the value, or the result of `fallback` if absent.
    ///
    /// `fallback` runs only when no value is present, and at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    ///
    /// let empty: Maybe<i32> = Maybe::empty();
    /// assert_eq!(empty.value_or_eval(|| 14), 14);
    /// assert_eq!(Maybe::of(12).value_or_eval(|| unreachable!()), 12);
    /// ```
    #[inline]
    pub fn value_or_eval<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(fallback)
    }

    /// Returns `self` if present, otherwise `other` converted into `Maybe<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(12_i64).or(Maybe::of(13_i64)), Maybe::of(12));
    /// assert_eq!(Maybe::<i64>::empty().or(Maybe::of(13_i32)), Maybe::of(13_i64));
    /// ```
    #[inline]
    pub fn or<U>(self, other: Maybe<U>) -> Self
    where
        U: Into<T>,
    {
        if self.has_value() { self } else { other.convert() }
    }

    /// Returns `self` if present, otherwise the `Maybe` produced by `fallback`.
    ///
    /// `fallback` is deferred: it runs only when `self` is absent.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.has_value() { self } else { fallback() }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies `function` to the value and wraps the result.
    ///
    /// An absent `Maybe` short-circuits: `function` is not invoked and the
    /// result is an absent `Maybe<U>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(12).map(|i| i + 1), Maybe::of(13));
    /// assert_eq!(Maybe::<i32>::empty().map(|i| i + 1), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe(self.0.map(function))
    }

    /// Applies `function`, which already returns a `Maybe`, without
    /// double-wrapping the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::empty() };
    /// assert_eq!(Maybe::of(12).and_then(halve), Maybe::of(6));
    /// assert_eq!(Maybe::of(13).and_then(halve), Maybe::empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.0 {
            Some(value) => function(value),
            None => Maybe::empty(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    /// Converts the contained value into a wider type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    ///
    /// let wide: Maybe<i64> = Maybe::of(7_i32).convert();
    /// assert_eq!(wide, Maybe::of(7_i64));
    /// ```
    #[inline]
    pub fn convert<U>(self) -> Maybe<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }
}

impl<T> Default for Maybe<T> {
    /// Returns an absent `Maybe`.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => formatter.debug_tuple("Maybe").field(value).finish(),
            None => formatter.write_str("Maybe(<absent>)"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(formatter, "Maybe({value})"),
            None => formatter.write_str("Maybe(<absent>)"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.0
    }
}

impl<T> From<Just<T>> for Maybe<T> {
    /// A `Just` always holds a value, so the result is always present.
    #[inline]
    fn from(just: Just<T>) -> Self {
        Self::of(just.into_inner())
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_is_present() {
        let value = Maybe::of(12);
        assert!(value.has_value());
        assert!(!value.is_empty());
    }

    #[rstest]
    fn test_empty_is_absent() {
        let value: Maybe<i32> = Maybe::empty();
        assert!(value.is_empty());
        assert_eq!(value, Maybe::default());
    }

    #[rstest]
    #[should_panic(expected = "EmptyAccess: called `Maybe::value()`")]
    fn test_value_on_empty_panics() {
        let value: Maybe<i32> = Maybe::empty();
        let _ = value.value();
    }

    #[rstest]
    fn test_or_else_is_deferred_when_present() {
        let mut calls = 0;
        let result = Maybe::of(12).or_else(|| {
            calls += 1;
            Maybe::of(13)
        });
        assert_eq!(result, Maybe::of(12));
        assert_eq!(calls, 0);
    }

    #[rstest]
    #[case(Some(3), Maybe::of(3))]
    #[case(None, Maybe::empty())]
    fn test_from_option(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::from(option), expected);
    }

    #[rstest]
    fn test_into_iter_yields_present_value() {
        let collected: Vec<i32> = Maybe::of(4).into_iter().collect();
        assert_eq!(collected, vec![4]);
        assert_eq!(Maybe::<i32>::empty().into_iter().count(), 0);
    }
}
