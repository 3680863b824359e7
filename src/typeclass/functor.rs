//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::{Just, Maybe};
//! use chainlift::typeclass::Functor;
//!
//! let present: Maybe<String> = Maybe::of(5).fmap(|n: i32| n.to_string());
//! assert_eq!(present, Maybe::of("5".to_string()));
//!
//! let absent: Maybe<String> = Maybe::<i32>::empty().fmap(|n| n.to_string());
//! assert_eq!(absent, Maybe::empty());
//!
//! assert_eq!(Just::new(2).fmap(|n| n * 21), Just::new(42));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Just, Maybe};

/// A type class for types that can have a function mapped over their contents.
///
/// Unlike [`Maybe::map`] and [`Just::map`], this abstracts over the container,
/// so generic code can be written once for both.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Just, Maybe};
/// use chainlift::typeclass::Functor;
///
/// fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
///     container.fmap(|n| format!("#{n}"))
/// }
///
/// assert_eq!(describe(Just::new(7)), Just::new("#7".to_string()));
/// assert_eq!(describe(Maybe::of(7)), Maybe::of("#7".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    /// use chainlift::typeclass::Functor;
    ///
    /// let name = Maybe::of("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::of(5));
    /// assert!(name.has_value());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Maybe;
    /// use chainlift::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::of(5).replace("replaced"), Maybe::of("replaced"));
    /// assert_eq!(Maybe::<i32>::empty().replace("replaced"), Maybe::empty());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Functor for Just<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Just<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Just<B>
    where
        F: FnOnce(&T) -> B,
    {
        Just::new(function(self.value()))
    }
}
