//! Function composition building blocks.
//!
//! This module provides the morphism layer that continuations are built
//! from. A continuation side is anything implementing [`Transform`]; sides are
//! composed with [`Composed`] and left untouched with [`Identity`].
//!
//! # Overview
//!
//! - [`Transform`]: A unary transformation applied by shared reference
//! - [`Identity`]: The identity transformation for every input type
//! - [`Composed`]: Left-to-right composition of two transformations
//! - [`BoxedTransform`] / [`boxed`]: Type-erased transformations
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//!
//! # Examples
//!
//! ```
//! use chainlift::compose::{Composed, Identity, Transform};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // Composed::new(f, g) runs f first, then g
//! let composed = Composed::new(add_one, double);
//! assert_eq!(composed.transform(5), 12);
//!
//! // Identity is a unit on both sides
//! assert_eq!(Composed::new(Identity, add_one).transform(5), add_one(5));
//! assert_eq!(Composed::new(add_one, Identity).transform(5), add_one(5));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `Composed::new(Composed::new(f, g), h) == Composed::new(f, Composed::new(g, h))`
//! - **Left Identity**: `Composed::new(Identity, f) == f`
//! - **Right Identity**: `Composed::new(f, Identity) == f`

mod transform;
mod utils;

pub use transform::{BoxedTransform, Composed, Identity, Transform, boxed};
pub use utils::identity;
