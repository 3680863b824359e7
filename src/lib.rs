//! # chainlift
//!
//! Small, immutable containers that chain through type-directed
//! continuations.
//!
//! ## Overview
//!
//! A computation starts from a [`Just`](control::Just), branches into an
//! [`Either`](control::Either) or filters into a [`Maybe`](control::Maybe),
//! and is driven forward by [`Continuation`](control::Continuation)s: pairs
//! of transformations where exactly one side runs for each input.
//!
//! - **Containers**: `Either`, `Maybe`, `Just`
//! - **Continuations**: per-variant application, side-by-side composition
//! - **Combinators**: `drop_right`, `drop_left`, `check`, `continue_left`,
//!   `continue_right`
//! - **Type Classes**: Functor, Monad and Bifunctor instances for the family
//!
//! Every flatten-or-wrap decision is made by the type checker. Nothing in
//! this crate inspects types at run time.
//!
//! ## Feature Flags
//!
//! - `compose`: [`Transform`](compose::Transform), `Identity`, composition
//! - `control`: the containers, continuations and combinators
//! - `typeclass`: Functor, Monad and Bifunctor traits and instances
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `tracing`: trace events on short-circuit paths
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chainlift::prelude::*;
//!
//! let result = Just::new(12)
//!     .map(|i| i + 1)
//!     .and_then(|i| -> Either<i32, f64> {
//!         if i == 12 { Either::Left(14) } else { Either::Right(12.0) }
//!     })
//!     .then(continue_right(|f: f64| f + 2.0))
//!     .then(continue_right(|f: f64| f * 2.0));
//!
//! assert_eq!(result, Either::Right(28.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Emits a `tracing` event at TRACE level when the `tracing` feature is on,
// and nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use chainlift::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
