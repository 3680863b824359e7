//! Unary morphisms that can be stored, composed and applied later.
//!
//! Closures in Rust have exactly one concrete signature, so a continuation
//! whose untouched side is "the identity" cannot simply store
//! [`identity`](super::identity) - it would be pinned to a single input type.
//! [`Transform`] abstracts over "something that maps an `A` to an `Output`"
//! and is implemented by:
//!
//! - every `Fn(A) -> B` (closures, function items, boxed `dyn Fn`)
//! - [`Identity`], which accepts any input type
//! - [`Composed`], the left-to-right composition of two transforms
//!
//! # Laws
//!
//! - **Left Identity**: `Composed::new(Identity, f).transform(x) == f.transform(x)`
//! - **Right Identity**: `Composed::new(f, Identity).transform(x) == f.transform(x)`
//! - **Associativity**: `Composed::new(Composed::new(f, g), h) == Composed::new(f, Composed::new(g, h))`
//!
//! # Examples
//!
//! ```rust
//! use chainlift::compose::{Composed, Identity, Transform};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! let composed = Composed::new(add_one, double);
//! assert_eq!(composed.transform(5), 12);
//!
//! assert_eq!(Identity.transform("unchanged"), "unchanged");
//! ```

/// A unary transformation from `A` to [`Transform::Output`].
///
/// The transformation is taken by shared reference so that the same value can
/// be applied any number of times, which is what a reusable continuation
/// needs.
pub trait Transform<A> {
    /// The type produced by the transformation.
    type Output;

    /// Applies the transformation to `input`.
    fn transform(&self, input: A) -> Self::Output;
}

impl<A, B, F> Transform<A> for F
where
    F: Fn(A) -> B,
{
    type Output = B;

    #[inline]
    fn transform(&self, input: A) -> B {
        self(input)
    }
}

/// The identity transformation for every input type.
///
/// Unlike the [`identity`](super::identity) function, a single `Identity`
/// value implements `Transform<A>` for all `A`.
///
/// # Examples
///
/// ```rust
/// use chainlift::compose::{Identity, Transform};
///
/// assert_eq!(Identity.transform(42), 42);
/// assert_eq!(Identity.transform(2.5), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity;

impl<A> Transform<A> for Identity {
    type Output = A;

    #[inline]
    fn transform(&self, input: A) -> A {
        input
    }
}

/// Left-to-right composition: `first` runs, then `second` receives its output.
///
/// Mismatched signatures are rejected at the point of application: a
/// `Composed<F, G>` only implements `Transform<A>` when
/// `G: Transform<<F as Transform<A>>::Output>`.
///
/// # Examples
///
/// ```rust
/// use chainlift::compose::{Composed, Transform};
///
/// let composed = Composed::new(|n: i32| n.to_string(), |s: String| s.len());
/// assert_eq!(composed.transform(12345), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Composed<F, G> {
    first: F,
    second: G,
}

impl<F, G> Composed<F, G> {
    /// Composes `first` with `second`.
    #[inline]
    pub const fn new(first: F, second: G) -> Self {
        Self { first, second }
    }

    /// Returns the transformation that runs first.
    #[inline]
    pub const fn first(&self) -> &F {
        &self.first
    }

    /// Returns the transformation that runs second.
    #[inline]
    pub const fn second(&self) -> &G {
        &self.second
    }
}

impl<A, F, G> Transform<A> for Composed<F, G>
where
    F: Transform<A>,
    G: Transform<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn transform(&self, input: A) -> Self::Output {
        self.second.transform(self.first.transform(input))
    }
}

/// A type-erased transformation from `A` to `B`.
///
/// `Box<dyn Fn(A) -> B>` is itself a `Fn(A) -> B`, so it implements
/// [`Transform<A>`] through the blanket impl.
pub type BoxedTransform<A, B> = Box<dyn Fn(A) -> B>;

/// Erases a transformation into a [`BoxedTransform`].
///
/// # Examples
///
/// ```rust
/// use chainlift::compose::{BoxedTransform, Identity, Transform, boxed};
///
/// let transforms: Vec<BoxedTransform<i32, i32>> = vec![
///     boxed(Identity),
///     boxed(|x: i32| x + 1),
/// ];
/// let results: Vec<i32> = transforms.iter().map(|t| t.transform(1)).collect();
/// assert_eq!(results, vec![1, 2]);
/// ```
pub fn boxed<A, T>(transform: T) -> BoxedTransform<A, T::Output>
where
    T: Transform<A> + 'static,
{
    Box::new(move |input: A| transform.transform(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closure_transform_applies_function() {
        let add_one = |x: i32| x + 1;
        assert_eq!(add_one.transform(1), 2);
    }

    #[rstest]
    fn function_item_transform_applies_function() {
        fn negate(x: i32) -> i32 {
            -x
        }
        assert_eq!(negate.transform(3), -3);
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn identity_returns_input(#[case] value: i32) {
        assert_eq!(Identity.transform(value), value);
    }

    #[rstest]
    fn identity_is_generic_over_input() {
        let identity = Identity;
        assert_eq!(identity.transform(1_u8), 1_u8);
        assert_eq!(identity.transform("text"), "text");
        assert_eq!(identity.transform(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn composed_runs_first_then_second() {
        let composed = Composed::new(|x: i32| x + 1, |x: i32| x * 10);
        assert_eq!(composed.transform(1), 20);
    }

    #[rstest]
    fn composed_changes_type() {
        let composed = Composed::new(|x: i32| x.to_string(), |s: String| s.len());
        assert_eq!(composed.transform(-100), 4);
    }

    #[rstest]
    fn composed_with_identity_is_unit() {
        let function = |x: i32| x * 3;
        assert_eq!(Composed::new(Identity, function).transform(4), 12);
        assert_eq!(Composed::new(function, Identity).transform(4), 12);
    }

    #[rstest]
    fn composed_accessors_expose_parts() {
        let composed = Composed::new(Identity, Identity);
        assert_eq!(*composed.first(), Identity);
        assert_eq!(*composed.second(), Identity);
    }

    #[rstest]
    fn boxed_transform_erases_type() {
        let transforms: Vec<BoxedTransform<i32, String>> = vec![
            boxed(|x: i32| x.to_string()),
            boxed(Composed::new(|x: i32| x * 2, |x: i32| format!("<{x}>"))),
        ];
        let results: Vec<String> = transforms.iter().map(|t| t.transform(21)).collect();
        assert_eq!(results, vec!["21".to_string(), "<42>".to_string()]);
    }
}
