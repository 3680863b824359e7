//! Type class traits for the container family.
//!
//! - [`Functor`]: mapping over `Maybe` and `Just`
//! - [`Monad`]: sequencing within `Maybe` or within `Just`
//! - [`Bifunctor`]: mapping over either side of an `Either`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `Functor` and `Monad` be written once for both
//! single-slot containers.
//!
//! # Examples
//!
//! ```rust
//! use chainlift::control::{Just, Maybe};
//! use chainlift::typeclass::{Functor, Monad};
//!
//! fn double<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double(Just::new(4)), Just::new(8));
//! assert_eq!(double(Maybe::of(4)), Maybe::of(8));
//! ```

mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
