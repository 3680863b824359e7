//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::Maybe;
//! use chainlift::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::of("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::of(n * 2));
//! assert_eq!(result, Maybe::of(84));
//! ```

use super::functor::Functor;
use crate::control::{Just, Maybe};

/// A type class for types that support sequencing of computations.
///
/// `flat_map` here stays inside one constructor: a `Just` binds to a `Just`
/// and a `Maybe` to a `Maybe`. Crossing into another family member is
/// [`Just::and_then`]'s job.
pub trait Monad: Functor {
    /// Lifts a plain value into the monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    /// use chainlift::typeclass::Monad;
    ///
    /// assert_eq!(<Maybe<()>>::pure(42), Maybe::of(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function returning the same monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::of(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Just<T> Implementation
// =============================================================================

impl<T> Monad for Just<T> {
    #[inline]
    fn pure<B>(value: B) -> Just<B> {
        Just::new(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Just<B>
    where
        F: FnOnce(T) -> Just<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_flat_map_present_to_present() {
        assert_eq!(Maybe::of(5).flat_map(|n| Maybe::of(n * 2)), Maybe::of(10));
    }

    #[rstest]
    fn maybe_flat_map_present_to_absent() {
        let result: Maybe<i32> = Maybe::of(5).flat_map(|_| Maybe::empty());
        assert_eq!(result, Maybe::empty());
    }

    #[rstest]
    fn maybe_flat_map_absent_short_circuits() {
        let result = Maybe::<i32>::empty().flat_map(|n| Maybe::of(n * 2));
        assert_eq!(result, Maybe::empty());
    }

    #[rstest]
    fn just_flat_map_transforms() {
        assert_eq!(Just::new(5).flat_map(|n| Just::new(n.to_string())), Just::new("5".to_string()));
    }

    #[rstest]
    fn just_pure_wraps() {
        assert_eq!(<Just<()>>::pure('a'), Just::new('a'));
    }

    #[rstest]
    fn maybe_left_identity_law() {
        let function = |n: i32| if n > 0 { Maybe::of(n) } else { Maybe::empty() };
        assert_eq!(<Maybe<()>>::pure(3).flat_map(function), function(3));
    }

    #[rstest]
    fn just_right_identity_law() {
        let value = Just::new(9);
        assert_eq!(value.flat_map(<Just<()>>::pure), value);
    }
}
