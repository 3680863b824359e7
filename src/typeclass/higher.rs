//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` and `Just<_>` as type constructors
//! directly. [`TypeConstructor`] recovers that ability with a GAT, and is the
//! foundation for [`Functor`](super::Functor) and [`Monad`](super::Monad).
//!
//! # Example
//!
//! ```rust
//! use chainlift::control::Maybe;
//! use chainlift::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Maybe<String> = reset(Maybe::of(42));
//! assert!(cleared.is_empty());
//! ```

use crate::control::{Just, Maybe};

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> TypeConstructor for Just<T> {
    type Inner = T;
    type WithType<B> = Just<B>;
}
