//! Chainable containers and the continuations that connect them.
//!
//! This module provides the three family members and everything needed to
//! chain them:
//!
//! - [`Either`]: exactly one of two alternatives
//! - [`Maybe`]: zero or one value
//! - [`Just`]: exactly one value, the usual start of a chain
//! - [`Continuation`]: a pair of transformations applied by branch
//! - [`Monadic`]: the sealed membership trait, providing [`then`](Monadic::then)
//!
//! and the derived combinators [`drop_right`], [`drop_left`], [`check`],
//! [`check_or`], [`continue_left`] and [`continue_right`].
//!
//! # Examples
//!
//! ## Branching and rejoining
//!
//! ```rust
//! use chainlift::compose::Identity;
//! use chainlift::control::{Continuation, Either, Just, Monadic, continue_right};
//!
//! let result = Just::new(12)
//!     .map(|i| i + 1)
//!     .and_then(|i| -> Either<i32, f64> {
//!         if i == 12 { Either::Left(14) } else { Either::Right(12.0) }
//!     })
//!     .then(Continuation::new(Identity, |f: f64| f + 2.0))
//!     .then(continue_right(|f: f64| f * 2.0));
//!
//! assert_eq!(result, Either::Right(28.0));
//! ```
//!
//! ## Filtering
//!
//! ```rust
//! use chainlift::control::{Either, Monadic, check, drop_right};
//!
//! let left: Either<i32, f64> = Either::Left(12);
//! let kept = left.then(drop_right()).then(check(|i: &i32| *i > 10));
//! assert_eq!(kept.value_or(0), 12);
//! ```

mod combinators;
mod continuation;
mod either;
mod error;
mod family;
mod just;
mod maybe;

pub use combinators::{
    Checked, DropLeft, DropRight, OnReject, Silent, check, check_or, continue_left,
    continue_right, drop_left, drop_right,
};
pub use continuation::{Absent, Apply, Continuation, Flatten, Inherit, Lifting, Resolve, Wrap};
pub use either::Either;
pub use error::EmptyAccess;
pub use family::{Family, Monadic};
pub use just::Just;
pub use maybe::Maybe;
