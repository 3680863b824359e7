//! Bifunctor type class - mapping over two type parameters.
//!
//! `Either` is the only two-parameter member of the family, and it is
//! neutral: neither side is privileged, so it is a [`Bifunctor`] rather than
//! a [`Functor`](super::Functor).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::Either;
//! use chainlift::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.first(|x| x * 2), Either::Left(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.second(|s| s.len()), Either::Right(5));
//! ```

use crate::control::Either;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    type Target<C, D>;

    /// Applies one function per type parameter.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainlift::control::Either;
    /// use chainlift::typeclass::Bifunctor;
    ///
    /// let either: Either<String, i32> = Either::Left("hello".to_string());
    /// let result = either.bimap_ref(|s| s.len(), |n| n * 2);
    /// assert!(either.has_left());
    /// assert_eq!(result, Either::Left(5));
    /// ```
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        self.fold(
            |left| Either::Left(first_function(left)),
            |right| Either::Right(second_function(right)),
        )
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}
